use std::path::PathBuf;

#[cfg_attr(not(feature = "ssr"), allow(dead_code))]
struct Args {
    prompt: String,
    size: Option<String>,
    out_dir: PathBuf,
}

#[cfg_attr(not(feature = "ssr"), allow(dead_code))]
fn usage(program: &str) -> String {
    format!("Usage: {program} <prompt> [--size WxH] [--out DIR]")
}

#[cfg_attr(not(feature = "ssr"), allow(dead_code))]
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let program = args.next().unwrap_or_else(|| "generate_logo".to_string());
    let mut prompt = None;
    let mut size = None;
    let mut out_dir = PathBuf::from(".");

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--size" => size = Some(args.next().ok_or_else(|| usage(&program))?),
            "--out" => out_dir = PathBuf::from(args.next().ok_or_else(|| usage(&program))?),
            other if prompt.is_none() => prompt = Some(other.to_string()),
            _ => return Err(usage(&program)),
        }
    }

    Ok(Args {
        prompt: prompt.ok_or_else(|| usage(&program))?,
        size,
        out_dir,
    })
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::{anyhow, bail, Context};
    use env_logger::Env;
    use logocreator::backend::HttpBackend;
    use logocreator::config::{ClientConfig, BACKEND_URL_VAR};
    use logocreator::controller::LogoController;
    use logocreator::download::{now_ms, save_to_dir};

    dotenv::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = parse_args(std::env::args()).map_err(|usage| anyhow!(usage))?;
    let config = ClientConfig::from_env().with_context(|| format!("{BACKEND_URL_VAR} must be set"))?;
    let backend = HttpBackend::new(&config);

    let mut controller = LogoController::new();
    if let Some(size) = args.size {
        controller = controller.with_size(size);
    }
    controller.update_prompt(args.prompt);

    log::info!("Generating logo via {}", config.generate_logo_url());
    controller.submit(&backend).await;
    if let Some(error) = controller.error() {
        bail!("{error}");
    }

    let download = controller
        .download(now_ms())
        .context("backend returned no usable image")?;
    let path = save_to_dir(&download, &args.out_dir)?;
    println!("Saved {}", path.display());
    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("This binary requires the 'ssr' feature");
    std::process::exit(1);
}
