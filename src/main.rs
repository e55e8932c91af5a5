use anyhow::Result;

#[actix_web::main]
async fn main() -> Result<()> {
    activity_signup::init_global()?;

    let store = activity_signup::build_activity_store()?;
    let server = activity_signup::build_http_server(store).await?;
    server.await?;

    Ok(())
}
