use anyhow::{Context, Result};
use logo_render::{Progress, generate_all};
use std::io::Write;

fn main() -> Result<()> {
    init_logger();

    let output_dir = std::env::current_dir().context("failed to resolve current directory")?;
    log::debug!("writing logos into {}", output_dir.display());

    generate_all(&output_dir, |event| match event {
        Progress::Rendering(variant) => println!("Generating {variant}..."),
        Progress::Written(path) => println!(
            "✓ {} created",
            path.file_name().unwrap_or_default().to_string_lossy()
        ),
    })
    .with_context(|| format!("failed to generate logos in {}", output_dir.display()))?;

    println!("\n✅ Both files were created successfully!");

    Ok(())
}

// Progress lines go to stdout; logs stay on stderr at `warn` unless RUST_LOG says otherwise.
fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
