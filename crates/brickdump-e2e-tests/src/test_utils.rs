use brickdump_lib::cli::DownloadParams;
use brickdump_lib::pool::PoolOptions;
use eyre::Result;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const INDEX_PATH: &str = "/downloads/";

pub fn gzip(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// `host:port` of the mock server, as it appears in download links.
pub fn download_host(server: &MockServer) -> String {
    server.address().to_string()
}

pub fn download_url(server: &MockServer, filename: &str) -> String {
    format!("{}/media/downloads/{}?1.0", server.uri(), filename)
}

/// A downloads page listing `filenames` the way the real site quotes them.
pub fn index_page(server: &MockServer, filenames: &[&str]) -> String {
    let mut page = String::from("<html><body><table>\n");
    for filename in filenames {
        page.push_str(&format!(
            "<tr><td><a href=\"{}\">{}</a></td></tr>\n",
            download_url(server, filename),
            filename
        ));
    }
    page.push_str("</table></body></html>\n");
    page
}

pub async fn mount_index(server: &MockServer, status: u16, body: String) {
    Mock::given(method("GET"))
        .and(path(INDEX_PATH))
        .and(header("user-agent", "Mozilla/5.0"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

pub async fn mount_file(server: &MockServer, filename: &str, status: u16, body: Vec<u8>) {
    Mock::given(method("GET"))
        .and(path(format!("/media/downloads/{filename}")))
        .and(header("user-agent", "Mozilla/5.0"))
        .respond_with(ResponseTemplate::new(status).set_body_bytes(body))
        .mount(server)
        .await;
}

pub fn download_params(server: &MockServer, output_dir: &Path) -> DownloadParams {
    DownloadParams {
        output_dir: output_dir.to_path_buf(),
        index_url: format!("{}{}", server.uri(), INDEX_PATH),
        download_host: download_host(server),
        user_agent: "Mozilla/5.0".to_string(),
        index_timeout: Duration::from_secs(10),
        pool: PoolOptions {
            parallelism: 4,
            file_timeout: Duration::from_secs(10),
        },
    }
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter("brickdump_lib=debug,brickdump_e2e_tests=debug")
        .with_test_writer()
        .try_init()
        .ok();
}
