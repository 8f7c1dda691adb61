use pathmap::{Bindings, Error, PathMapper};
use tests::{COMPONENT_PATHS, mapper};

#[test]
fn test_construct() -> anyhow::Result<()> {
    let pattern = "/users/[path]/posts/[postId].json";
    let mapper: PathMapper = pattern.parse()?;
    assert_eq!(mapper.pattern(), pattern);
    assert_eq!(mapper.to_string(), pattern);
    assert_eq!(mapper.params(), ["path", "postId"]);
    Ok(())
}

#[test]
fn test_match() -> anyhow::Result<()> {
    let mapper = mapper("/pages/[...page].page.json");
    assert_eq!(
        mapper.match_path("/pages/about-us.page.json")?,
        Bindings::from([("page", "about-us")])
    );
    assert_eq!(
        mapper.match_path("/pages/products/shoes.page.json")?,
        Bindings::from([("page", "products/shoes")])
    );
    Ok(())
}

#[test]
fn test_match_failure() {
    let mapper = mapper("/pages/[...page].page.json");
    let err = mapper.match_path("/users/123/comments/456").unwrap_err();
    assert_eq!(
        err,
        Error::Match {
            path: "/users/123/comments/456".to_owned(),
            regex: mapper.compiled().as_str().to_owned(),
        }
    );
    assert!(err.is_no_match());
    assert_eq!(
        err.to_string(),
        format!(
            "path '/users/123/comments/456' does not match regex '{}'",
            mapper.regex().as_str()
        )
    );

    // The mapper is still usable after a failure.
    assert!(mapper.match_path("/pages/a.page.json").is_ok());
}

#[test]
fn test_match_components() -> anyhow::Result<()> {
    let mapper = mapper("/components/[...component].component.json");
    for &(path, component) in COMPONENT_PATHS {
        let bindings = mapper.match_path(path)?;
        assert_eq!(bindings, Bindings::from([("component", component)]), "{path}");
    }
    Ok(())
}

#[test]
fn test_match_is_idempotent() -> anyhow::Result<()> {
    let mapper = mapper("/components/[...component].component.json");
    let path = "/components/long/path-to/the_mooin/99/embodiWithJs/and/TypeScript.component.json";
    let expected = Bindings::from([(
        "component",
        "long/path-to/the_mooin/99/embodiWithJs/and/TypeScript",
    )]);
    for _ in 0..3 {
        assert_eq!(mapper.match_path(path)?, expected);
        assert!(mapper.test(path));
    }
    Ok(())
}

#[test]
fn test_match_repeated_id_in_order() -> anyhow::Result<()> {
    let mapper = mapper("/hello/world/[element]/[...element].page.json");
    let bindings = mapper.match_path("/hello/world/2014-menu/additional-test/some.page.json")?;
    assert_eq!(
        bindings.values().collect::<Vec<_>>(),
        ["2014-menu", "additional-test/some"]
    );
    assert_eq!(bindings.get("element"), Some("2014-menu"));
    Ok(())
}

#[test]
fn test_match_single_and_suffix() -> anyhow::Result<()> {
    let mapper = mapper("/users/[path]/posts/[postId].json");
    let bindings = mapper.match_path("users/jane.doe/posts/42.json/")?;
    assert_eq!(
        bindings,
        Bindings::from([("path", "jane.doe"), ("postId", "42")])
    );
    assert!(mapper.match_path("/users/jane/doe/posts/42.json").is_err());
    Ok(())
}

#[test]
fn test_test() {
    let mapper = mapper("/pages/[...page].page.json");
    assert!(mapper.test("/pages/about-us.page.json"));
    assert!(mapper.test("/pages/products/shoes.page.json"));
    assert!(!mapper.test("/users/123/comments/456"));
    assert!(!mapper.test("/pages/.page.json"));

    let mapper = tests::mapper("/embodi/[element].json");
    assert!(!mapper.test("/embodi/123/comments/456"));
    assert!(mapper.test("/embodi/123.json"));
}

#[test]
fn test_test_components() {
    let mapper = mapper("/components/[...component].component.json");
    for &(path, _) in COMPONENT_PATHS {
        assert!(mapper.test(path), "{path}");
    }
}

#[test]
fn test_shared_between_threads() {
    let mapper = mapper("/components/[...component].component.json");
    std::thread::scope(|scope| {
        for &(path, component) in COMPONENT_PATHS {
            let mapper = &mapper;
            scope.spawn(move || {
                for _ in 0..100 {
                    let bindings = mapper.match_path(path).unwrap();
                    assert_eq!(bindings.get("component"), Some(component));
                }
            });
        }
    });
}

#[test]
fn test_non_ascii_paths_do_not_match() {
    let mapper = mapper("/pages/[...page].page.json");
    assert!(!mapper.test("/pages/café.page.json"));
    let err = mapper.match_path("/pages/日本/x.page.json").unwrap_err();
    assert!(err.is_no_match());
}
