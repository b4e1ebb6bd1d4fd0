use crate::catalog::{
    filter, location_options, present, CatalogSource, Category, Endpoint, FilterCriteria,
    ListingCard, ListingRecord, LocationFilter, PriceBucket,
};
use crate::errors::{ResultResp, ServerError};
use crate::responses::{html_response, html_response_with_status};
use crate::static_files;
use crate::templates::pages;
use crate::templates::pages::ListingsVm;
use astra::Request;
use std::collections::HashMap;
use std::io::Read;
use url::form_urlencoded;

/// How many featured cards the home page shows.
const FEATURED_COUNT: usize = 3;

struct CategoryPage {
    category: Category,
    path: &'static str,
    title: &'static str,
    intro: &'static str,
}

const BUSINESS_PAGE: CategoryPage = CategoryPage {
    category: Category::Business,
    path: "/business-for-sale",
    title: "生意转让",
    intro: "精选洛杉矶优质生意资源，助您轻松开启创业之路。",
};

const INDUSTRIAL_PAGE: CategoryPage = CategoryPage {
    category: Category::Industrial,
    path: "/industrial-warehouse",
    title: "工业/仓库",
    intro: "专注于洛杉矶东区及内陆帝国 (Inland Empire) 的工业地产市场。",
};

const OFFICE_PAGE: CategoryPage = CategoryPage {
    category: Category::Office,
    path: "/office-retail",
    title: "办公/商铺",
    intro: "覆盖核心商圈的办公楼与零售商铺资源，协助您寻找最佳商业选址。",
};

pub fn handle(mut req: Request, catalog: &dyn CatalogSource) -> ResultResp {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => home_route(catalog),

        ("GET", "/business-for-sale") => listings_route(&req, catalog, &BUSINESS_PAGE),
        ("GET", "/industrial-warehouse") => listings_route(&req, catalog, &INDUSTRIAL_PAGE),
        ("GET", "/office-retail") => listings_route(&req, catalog, &OFFICE_PAGE),

        ("GET", "/about") => html_response(pages::about_page()),
        ("GET", "/market-insights") => html_response(pages::insights_page()),
        ("GET", "/success-stories") => html_response(pages::stories_page()),

        ("GET", "/contact") => html_response(pages::contact_page()),
        ("POST", "/contact") => contact_route(&mut req),

        ("GET", p) if p.starts_with("/listing/") => detail_route(p, catalog),

        ("GET", p) if static_files::is_static_path(p) => static_files::serve(p),

        _ => html_response_with_status(pages::not_found_page(), 404),
    }
}

fn home_route(catalog: &dyn CatalogSource) -> ResultResp {
    match catalog.load(Endpoint::Featured) {
        Ok(records) => {
            let cards: Vec<ListingCard> =
                records.iter().take(FEATURED_COUNT).map(present).collect();
            html_response(pages::home_page(Some(&cards)))
        }
        Err(e) => {
            eprintln!("⚠️ Featured catalog load failed: {e}");
            html_response(pages::home_page(None))
        }
    }
}

/// One catalog page view: load, narrow to the page's category, apply the
/// request's filter criteria, render. A load failure is caught here and
/// rendered as the error state with a manual reload link.
fn listings_route(req: &Request, catalog: &dyn CatalogSource, page: &CategoryPage) -> ResultResp {
    let criteria = criteria_from_query(req);

    match catalog.load(Endpoint::Listings) {
        Ok(records) => {
            let in_category: Vec<&ListingRecord> = records
                .iter()
                .filter(|r| r.category() == page.category)
                .collect();

            let locations = location_options(&in_category);
            let cards: Vec<ListingCard> = filter(&in_category, &criteria)
                .into_iter()
                .map(present)
                .collect();

            html_response(pages::listings_page(&ListingsVm {
                title: page.title,
                intro: page.intro,
                path: page.path,
                criteria: &criteria,
                locations: &locations,
                cards,
            }))
        }
        Err(e) => {
            eprintln!("⚠️ Catalog load failed for {}: {e}", page.path);
            html_response(pages::listings::listings_error_page(page.title, page.path))
        }
    }
}

fn detail_route(path: &str, catalog: &dyn CatalogSource) -> ResultResp {
    let id = path.trim_start_matches("/listing/");
    if id.is_empty() {
        return html_response_with_status(pages::not_found_page(), 404);
    }

    match catalog.load(Endpoint::Listings) {
        Ok(records) => match records.iter().find(|r| r.listing_id == id) {
            Some(record) => html_response(pages::detail_page(record)),
            None => html_response_with_status(pages::missing_listing_page(), 404),
        },
        Err(e) => {
            eprintln!("⚠️ Catalog load failed for {path}: {e}");
            html_response(pages::listings::listings_error_page("房源详情", path))
        }
    }
}

/// Simulated submission: the form is acknowledged and logged, nothing is
/// stored or forwarded.
fn contact_route(req: &mut Request) -> ResultResp {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(e.to_string()))?;

    let form: HashMap<String, String> = form_urlencoded::parse(&body).into_owned().collect();

    let name = form.get("name").map(String::as_str).unwrap_or("");
    let phone = form.get("phone").map(String::as_str).unwrap_or("");
    eprintln!("📨 Contact request from {name} ({phone})");

    html_response(pages::contact_received_page(name))
}

fn query_params(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn criteria_from_query(req: &Request) -> FilterCriteria {
    let params = query_params(req);

    FilterCriteria {
        search: params.get("q").cloned().unwrap_or_default(),
        location: LocationFilter::from_query(params.get("location").map(String::as_str).unwrap_or("")),
        price: PriceBucket::from_query(params.get("price").map(String::as_str).unwrap_or("")),
    }
}
