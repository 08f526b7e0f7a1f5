use crate::db::connection::{init_db, Database};
use crate::db::seed::seed_if_empty;
use crate::responses::error_to_html_response;
use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;

mod db;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;


const DEFAULT_DB_PATH: &str = "hostel_sentinel.sqlite3";
const LISTEN_ADDR: &str = "0.0.0.0:8000";

fn main() {
    let db_path =
        std::env::var("HOSTEL_DB").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());
    let db = Database::new(db_path);

    if let Err(e) = init_db(&db, "sql/schema.sql") {
        eprintln!("Database initialization failed: {e}");
        std::process::exit(1);
    }

    if let Err(e) = seed_if_empty(&db) {
        eprintln!("Database seeding failed: {e}");
        std::process::exit(1);
    }

    let addr: SocketAddr = LISTEN_ADDR.parse().unwrap();
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &db) {
        Ok(resp) => resp,
        Err(err) => error_to_html_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
