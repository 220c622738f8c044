use std::io::Write;

use anyhow::Result;
use moviedb_service::CatalogService;
use moviedb_site::SiteOptions;

pub(crate) async fn generate_website<W: Write>(
    service: &CatalogService,
    options: &SiteOptions,
    out: &mut W,
) -> Result<()> {
    let path = service.generate_site(options).await?;
    writeln!(out, "Website was generated successfully: {}", path.display())?;
    Ok(())
}
