use crate::catalog::{CatalogSource, FileCatalog, HttpCatalog};
use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;

mod catalog;
mod errors;
mod responses;
mod router;
mod static_files;
mod templates;

#[cfg(test)]
mod tests;

const BIND_ADDR: &str = "127.0.0.1:3000";

fn main() {
    // Default: read the catalog documents straight out of public/. An HTTP
    // fetch back into our own listener would hold two pool workers per page
    // view; LISTINGS_DATA_URL switches to the HTTP loader for an external
    // data host only.
    let catalog: Box<dyn CatalogSource> = match std::env::var("LISTINGS_DATA_URL") {
        Ok(data_url) => match HttpCatalog::new(&data_url) {
            Ok(catalog) => Box::new(catalog),
            Err(e) => {
                eprintln!("❌ Catalog client setup failed: {e}");
                std::process::exit(1);
            }
        },
        Err(_) => Box::new(FileCatalog::new(static_files::PUBLIC_DIR)),
    };

    let addr: SocketAddr = match BIND_ADDR.parse() {
        Ok(addr) => addr,
        Err(e) => {
            eprintln!("❌ Bad bind address: {e}");
            std::process::exit(1);
        }
    };
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, catalog.as_ref()) {
        Ok(resp) => resp,
        Err(err) => responses::html_error_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
