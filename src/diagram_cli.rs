//! generate / archives / languages subcommands

use clap::Args;
use diagram::{DiagramGenerator, MxGraphWriter};
use lang::LanguageRegistry;
use repo::{GitHubProvider, LocalProvider, RepositoryProvider};

#[derive(Args)]
pub struct SourceArgs {
    /// Repository URL (https://github.com/owner/repo or owner/repo), or a directory with --local
    source: String,
    /// Languages to extract (id or name, e.g. py, java, typescript)
    #[arg(short, long = "lang", value_delimiter = ',', required = true)]
    languages: Vec<String>,
    /// Read from a local directory instead of GitHub
    #[arg(long)]
    local: bool,
}

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    source: SourceArgs,
    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<String>,
    /// Print the JSON envelope (base_archives, archives, xml) instead of raw XML
    #[arg(long)]
    json: bool,
    /// Also write the raw XML to this path
    #[arg(long)]
    dump: Option<String>,
}

#[derive(Args)]
pub struct ArchivesArgs {
    #[command(flatten)]
    source: SourceArgs,
    /// JSON output
    #[arg(long)]
    json: bool,
}

pub async fn generate(args: GenerateArgs) -> anyhow::Result<()> {
    let registry = LanguageRegistry::builtin();
    let languages = resolve_languages(&registry, &args.source.languages);
    let (provider, root) = open_source(&args.source)?;

    tracing::info!("Generating diagram for {} ({})", args.source.source, languages.join(", "));
    let generation = DiagramGenerator::new(provider.as_ref(), &registry)
        .run(&root, &languages)
        .await?;

    if let Some(path) = &args.dump {
        MxGraphWriter::write(&generation.document, path)?;
        tracing::info!("XML written to: {}", path);
    }

    let content = if args.json {
        serde_json::to_string_pretty(&generation.envelope())?
    } else {
        MxGraphWriter::render(&generation.document)
    };

    match &args.output {
        Some(file) => {
            std::fs::write(file, content)?;
            tracing::info!("Saved to: {}", file);
        }
        None => println!("{}", content),
    }

    Ok(())
}

pub async fn archives(args: ArchivesArgs) -> anyhow::Result<()> {
    let registry = LanguageRegistry::builtin();
    let languages = resolve_languages(&registry, &args.source.languages);
    let (provider, root) = open_source(&args.source)?;

    let archives = DiagramGenerator::new(provider.as_ref(), &registry)
        .list_archives(&root, &languages)
        .await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&archives)?);
    } else {
        for archive in &archives {
            let marker = if archive.excluded { "  [excluded]" } else { "" };
            println!("{}{}", archive.node.path, marker);
        }
        println!(
            "\n{} files, {} excluded folders",
            archives.iter().filter(|a| !a.excluded).count(),
            archives.iter().filter(|a| a.excluded).count()
        );
    }

    Ok(())
}

pub fn languages() {
    let registry = LanguageRegistry::builtin();
    for spec in registry.iter() {
        println!("{:<6} {:<12} {}", spec.id, spec.name, spec.extensions.join(" "));
    }
}

/// 名称 -> 标识; 未知名称只警告
fn resolve_languages(registry: &LanguageRegistry, names: &[String]) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for name in names {
        match registry.resolve(name.trim()) {
            Some(spec) if !ids.iter().any(|id| id == spec.id) => ids.push(spec.id.to_string()),
            Some(_) => {}
            None => tracing::warn!("Unknown language '{}', ignored", name),
        }
    }
    ids
}

fn open_source(args: &SourceArgs) -> anyhow::Result<(Box<dyn RepositoryProvider>, String)> {
    if args.local {
        let provider = LocalProvider::new(&args.source)?;
        let root = provider.root_location();
        Ok((Box::new(provider), root))
    } else {
        let provider = GitHubProvider::from_env()?;
        let root = provider.root_location(&args.source)?;
        Ok((Box::new(provider), root))
    }
}
