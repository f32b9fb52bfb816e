use anyhow::{bail, Context};
use brandgen_rs::{
    find_template, save_template, OutputFormat, TemplateConfig, TemplateElements,
    TemplateGenerator, MARKETING_SIZES, SOCIAL_MEDIA_SIZES,
};
use clap::Parser;
use std::path::PathBuf;

/// brandgen: generate branded social-media and marketing images from a
/// brand description file
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to a brand elements JSON file (colors, text, logo, typography)
    #[clap(short, long, required_unless_present = "list_templates")]
    pub brand: Option<PathBuf>,

    /// Comma-separated template ids (e.g. instagram-post,flyer-letter)
    #[clap(short, long, value_delimiter = ',')]
    pub templates: Vec<String>,

    /// Output format: png or jpg
    #[clap(short, long, default_value = "png")]
    pub format: OutputFormat,

    /// Directory output files are written into
    #[clap(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// List all known template ids and exit
    #[clap(long)]
    pub list_templates: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args: Args = Args::parse();

    if args.list_templates {
        print_registry();
        return Ok(());
    }

    let brand_path = args.brand.expect("clap enforces --brand");
    let brand_str = std::fs::read_to_string(&brand_path)
        .with_context(|| format!("Failed to read brand file: {}", brand_path.display()))?;
    let elements: TemplateElements =
        serde_json::from_str(&brand_str).context("Failed to parse brand file as JSON")?;

    if args.templates.is_empty() {
        bail!("No templates requested; pass --templates or --list-templates");
    }

    let mut configs: Vec<TemplateConfig> = Vec::with_capacity(args.templates.len());
    for id in &args.templates {
        let config = find_template(id)?;
        configs.push(config.clone());
    }

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Failed to create output dir: {}", args.out_dir.display()))?;

    let generator = TemplateGenerator::new();
    let results = generator
        .generate_batch_templates(&configs, &elements, args.format)
        .await;

    let mut failures = 0usize;
    for (config, result) in configs.iter().zip(results) {
        match result {
            Ok(template) => {
                let path = save_template(&template, &args.out_dir, None)
                    .with_context(|| format!("Failed to write output for {}", config.id))?;
                println!("{} -> {}", config.id, path.display());
            }
            Err(err) => {
                eprintln!("{} failed: {}", config.id, err);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{failures} of {} templates failed", configs.len());
    }
    Ok(())
}

fn print_registry() {
    println!("Social media sizes:");
    let mut social: Vec<_> = SOCIAL_MEDIA_SIZES.values().collect();
    social.sort_by(|a, b| a.id.cmp(&b.id));
    for config in social {
        println!("  {:<20} {:>5}x{:<5} {}", config.id, config.width, config.height, config.name);
    }

    println!("Marketing sizes:");
    let mut marketing: Vec<_> = MARKETING_SIZES.values().collect();
    marketing.sort_by(|a, b| a.id.cmp(&b.id));
    for config in marketing {
        println!("  {:<20} {:>5}x{:<5} {}", config.id, config.width, config.height, config.name);
    }
}
