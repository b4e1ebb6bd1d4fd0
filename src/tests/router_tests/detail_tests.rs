use crate::router::handle;
use crate::tests::utils::{get, read_body, sample_records, FakeCatalog};

#[test]
fn detail_page_shows_the_full_record() {
    let mut records = sample_records();
    records[0].description = "成熟商圈奶茶店，现任店主经营六年。".into();
    records[0].highlights = vec![
        "地段好".into(),
        "租金低".into(),
        "设备全".into(),
        "客源稳".into(),
    ];
    let catalog = FakeCatalog::new(records);

    let resp = handle(get("/listing/b1"), &catalog).unwrap();
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("奶茶店转让"));
    assert!(body.contains("成熟商圈奶茶店"));
    // The detail view lists every highlight, not just the card's three.
    for highlight in ["地段好", "租金低", "设备全", "客源稳"] {
        assert!(body.contains(highlight), "missing {highlight}");
    }
}

#[test]
fn unknown_ids_resolve_to_the_missing_listing_view() {
    let catalog = FakeCatalog::new(sample_records());

    let resp = handle(get("/listing/nope"), &catalog).unwrap();
    assert_eq!(resp.status(), 404);

    let body = read_body(resp);
    assert!(body.contains("未找到该房源"));
    assert!(body.contains("返回列表"));
}

#[test]
fn bare_listing_prefix_is_not_found() {
    let catalog = FakeCatalog::new(sample_records());

    let resp = handle(get("/listing/"), &catalog).unwrap();
    assert_eq!(resp.status(), 404);
}

#[test]
fn detail_load_failure_renders_the_retry_state() {
    let catalog = FakeCatalog::failing();

    let resp = handle(get("/listing/b1"), &catalog).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(read_body(resp).contains("重新加载"));
}
