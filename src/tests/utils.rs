use crate::catalog::{CatalogError, CatalogSource, Endpoint, ListingRecord};
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

/// In-memory catalog source; stands in for the HTTP loader in router tests.
pub struct FakeCatalog {
    pub records: Vec<ListingRecord>,
    pub fail: bool,
}

impl FakeCatalog {
    pub fn new(records: Vec<ListingRecord>) -> Self {
        Self {
            records,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            records: Vec::new(),
            fail: true,
        }
    }
}

impl CatalogSource for FakeCatalog {
    fn load(&self, _endpoint: Endpoint) -> Result<Vec<ListingRecord>, CatalogError> {
        if self.fail {
            Err(CatalogError::Network("connection refused".into()))
        } else {
            Ok(self.records.clone())
        }
    }
}

pub fn record(
    id: &str,
    category: &str,
    title: &str,
    price: &str,
    location: &str,
) -> ListingRecord {
    ListingRecord {
        listing_id: id.into(),
        category: category.into(),
        title: title.into(),
        price: price.into(),
        location: location.into(),
        highlights: Vec::new(),
        description: String::new(),
        images: Vec::new(),
        is_success_story: false,
    }
}

/// The five-record batch used by the price-bucket scenarios:
/// two at $80,000, two at $150,000, one at $250,000, document order b1..b5.
pub fn sample_records() -> Vec<ListingRecord> {
    vec![
        record("b1", "生意转让", "奶茶店转让", "$80,000", "Rowland Heights (罗兰岗)"),
        record("b2", "生意转让", "中餐馆转让", "$150,000", "Ontario (Inland Empire)"),
        record("b3", "生意转让", "干洗店转让", "$80,000", "Arcadia (亚凯迪亚)"),
        record("b4", "生意转让", "日料店转让", "$150,000", "Irvine (尔湾)"),
        record("b5", "生意转让", "连锁超市转让", "$250,000", "Rowland Heights (罗兰岗)"),
    ]
}

pub fn get(path: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

pub fn post(path: &str, body: &str) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(path)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn read_body(mut resp: Response) -> String {
    let mut buf = Vec::new();
    resp.body_mut().reader().read_to_end(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}
