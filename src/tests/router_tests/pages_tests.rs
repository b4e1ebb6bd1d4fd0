use crate::router::handle;
use crate::tests::utils::{get, post, read_body, record, sample_records, FakeCatalog};
use url::form_urlencoded;

#[test]
fn home_shows_the_first_three_featured_listings() {
    let mut records = sample_records();
    records.truncate(4);
    let catalog = FakeCatalog::new(records);

    let resp = handle(get("/"), &catalog).unwrap();
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("奶茶店转让"));
    assert!(body.contains("中餐馆转让"));
    assert!(body.contains("干洗店转让"));
    assert!(!body.contains("日料店转让"));
}

#[test]
fn category_page_renders_the_full_grid_without_filters() {
    let catalog = FakeCatalog::new(sample_records());

    let resp = handle(get("/business-for-sale"), &catalog).unwrap();
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    for title in [
        "奶茶店转让",
        "中餐馆转让",
        "干洗店转让",
        "日料店转让",
        "连锁超市转让",
    ] {
        assert!(body.contains(title), "missing {title}");
    }
}

#[test]
fn price_bucket_keeps_exactly_the_mid_priced_records_in_order() {
    // Five records: two at $80,000, two at $150,000, one at $250,000.
    let catalog = FakeCatalog::new(sample_records());

    let resp = handle(get("/business-for-sale?price=100k-200k"), &catalog).unwrap();
    let body = read_body(resp);

    assert!(body.contains("中餐馆转让"));
    assert!(body.contains("日料店转让"));
    assert!(!body.contains("奶茶店转让"));
    assert!(!body.contains("干洗店转让"));
    assert!(!body.contains("连锁超市转让"));

    // Document order survives filtering.
    let first = body.find("中餐馆转让").unwrap();
    let second = body.find("日料店转让").unwrap();
    assert!(first < second);
}

#[test]
fn search_query_is_percent_decoded() {
    let catalog = FakeCatalog::new(sample_records());

    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("q", "奶茶")
        .finish();
    let resp = handle(get(&format!("/business-for-sale?{query}")), &catalog).unwrap();
    let body = read_body(resp);

    assert!(body.contains("奶茶店转让"));
    assert!(!body.contains("中餐馆转让"));
}

#[test]
fn categories_do_not_leak_across_pages() {
    let mut records = sample_records();
    records.push(record(
        "IND-1",
        "仓库出售",
        "Ontario 独立仓库",
        "$2,500,000",
        "Ontario (Inland Empire)",
    ));
    let catalog = FakeCatalog::new(records);

    let body = read_body(handle(get("/business-for-sale"), &catalog).unwrap());
    assert!(!body.contains("Ontario 独立仓库"));

    let body = read_body(handle(get("/industrial-warehouse"), &catalog).unwrap());
    assert!(body.contains("Ontario 独立仓库"));
    assert!(!body.contains("奶茶店转让"));
}

#[test]
fn filters_that_match_nothing_render_the_empty_state() {
    let catalog = FakeCatalog::new(sample_records());

    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("q", "不存在的关键词")
        .finish();
    let body = read_body(handle(get(&format!("/business-for-sale?{query}")), &catalog).unwrap());

    assert!(body.contains("未找到相关房源"));
    assert!(body.contains("清除所有筛选"));
}

#[test]
fn load_failure_renders_the_retry_state_and_retry_recovers() {
    let failing = FakeCatalog::failing();

    let resp = handle(get("/business-for-sale"), &failing).unwrap();
    assert_eq!(resp.status(), 200);
    let body = read_body(resp);
    assert!(body.contains("房源加载失败"));
    assert!(body.contains("重新加载"));

    // Following the reload link re-enters the load; once the source is
    // healthy the grid comes back.
    let healthy = FakeCatalog::new(sample_records());
    let body = read_body(handle(get("/business-for-sale"), &healthy).unwrap());
    assert!(body.contains("奶茶店转让"));
    assert!(!body.contains("房源加载失败"));
}

#[test]
fn home_survives_a_featured_load_failure() {
    let catalog = FakeCatalog::failing();

    let resp = handle(get("/"), &catalog).unwrap();
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("房源加载失败"));
}

#[test]
fn unknown_routes_get_the_not_found_page() {
    let catalog = FakeCatalog::new(Vec::new());

    let resp = handle(get("/no-such-page"), &catalog).unwrap();
    assert_eq!(resp.status(), 404);
    assert!(read_body(resp).contains("404"));
}

#[test]
fn static_pages_render_without_touching_the_catalog() {
    // A failing source must not matter for the static pages.
    let catalog = FakeCatalog::failing();

    for (path, marker) in [
        ("/about", "关于我们"),
        ("/market-insights", "市场洞察"),
        ("/success-stories", "真实成交案例"),
        ("/contact", "联系我们"),
    ] {
        let resp = handle(get(path), &catalog).unwrap();
        assert_eq!(resp.status(), 200, "{path}");
        assert!(read_body(resp).contains(marker), "{path}");
    }
}

#[test]
fn every_category_fallback_asset_is_served() {
    use crate::catalog::Category;

    let catalog = FakeCatalog::new(Vec::new());

    for category in [
        Category::Business,
        Category::Industrial,
        Category::Office,
        Category::Other,
    ] {
        let path = category.fallback_image();
        let resp = handle(get(path), &catalog).unwrap();
        assert_eq!(resp.status(), 200, "{path}");
        assert_eq!(
            resp.headers()
                .get("content-type")
                .and_then(|v| v.to_str().ok()),
            Some("image/svg+xml"),
            "{path}"
        );
    }
}

#[test]
fn contact_post_is_acknowledged() {
    let catalog = FakeCatalog::new(Vec::new());

    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("name", "王先生")
        .append_pair("phone", "6261234567")
        .finish();
    let resp = handle(post("/contact", &query), &catalog).unwrap();

    assert_eq!(resp.status(), 200);
    let body = read_body(resp);
    assert!(body.contains("消息已发送"));
    assert!(body.contains("王先生"));
}
