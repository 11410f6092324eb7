use brickdump_lib::cli::{parse_args, resolve_command, run_download};

#[tokio::main(flavor = "multi_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = parse_args();
    let params = resolve_command(args.command)?;
    run_download(params).await?;

    Ok(())
}
