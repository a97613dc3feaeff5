#[actix_web::main]
async fn main() -> std::io::Result<()> {
    abogados_server::run().await
}
