#[cfg(feature = "http_api")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::net::SocketAddr;

    use cost_tool::{EmployeeRoster, ProjectData, http_api};

    let addr: SocketAddr = std::env::var("COST_TOOL_HTTP_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
        .parse()?;

    println!("cost-tool HTTP API listening on http://{addr}");
    let project = ProjectData::new();
    let roster = EmployeeRoster::default();
    http_api::serve(addr, project, roster).await?;
    Ok(())
}

#[cfg(not(feature = "http_api"))]
fn main() {
    eprintln!("Rebuild with the `http_api` feature to enable the HTTP server.");
}
