//! Command implementations. Each writes its result to `out` so tests can
//! capture it without spawning a process.

use std::io::Write;

use anyhow::{Context, Result, anyhow};
use rinki_config::{BuildEnv, ConfigResolver, ProjectLayout, ProjectSettings};

use crate::cli::{PrintArgs, ProjectArgs, RuleArgs};

/// Build a resolver from the project root, its settings and the mode.
///
/// `--mode` takes precedence over `NODE_ENV`.
pub fn resolver_for(args: &ProjectArgs) -> Result<ConfigResolver> {
    let root = std::path::absolute(&args.root)
        .with_context(|| format!("invalid project root {}", args.root.display()))?;

    let settings = ProjectSettings::load(&root)
        .with_context(|| format!("failed to load settings for {}", root.display()))?;

    let mode = match args.mode {
        Some(mode) => mode.into(),
        None => BuildEnv::detect().mode(),
    };

    tracing::debug!(%mode, root = %root.display(), "selected build mode");

    Ok(ConfigResolver::new(mode, ProjectLayout::new(root), settings))
}

pub fn print_execute(args: &PrintArgs, out: &mut impl Write) -> Result<()> {
    let config = resolver_for(&args.project)?.resolve();

    let text = if args.compact {
        config.to_json()?
    } else {
        config.to_json_pretty()?
    };

    writeln!(out, "{text}")?;
    Ok(())
}

pub fn rule_execute(args: &RuleArgs, out: &mut impl Write) -> Result<()> {
    let config = resolver_for(&args.project)?.resolve();

    let rule = config
        .rule_for(&args.path)
        .ok_or_else(|| anyhow!("no module rule matches {}", args.path.display()))?;

    writeln!(out, "test: {}", rule.test)?;
    if let Some(exclude) = &rule.exclude {
        writeln!(out, "exclude: {exclude}")?;
    }
    writeln!(out, "use:")?;
    for entry in &rule.use_entries {
        writeln!(out, "  - {entry}")?;
    }
    Ok(())
}
