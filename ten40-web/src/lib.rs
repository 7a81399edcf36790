//! HTTP boundary for the tax calculator.
//!
//! Thin layer over `ten40-core`: handlers validate raw strings, run the
//! calculator, and translate faults into generic user-facing errors. All
//! state is immutable and shared across workers.

pub mod handlers;
pub mod state;

use actix_web::{App, HttpServer, web};

use crate::state::AppState;

pub async fn run_server(state: AppState, host: &str, port: u16) -> std::io::Result<()> {
    let state = web::Data::new(state);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(handlers::calculate)
            .service(handlers::validate)
            .service(handlers::generate_form)
            .service(handlers::health_check)
    })
    .bind((host, port))?
    .run()
    .await
}
