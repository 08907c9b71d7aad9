//! Mode-driven resolution of the bundler configuration.
//!
//! Every operation here is a pure function of the mode, the project layout
//! and the settings; none of them can fail.

use indexmap::IndexMap;

use crate::bundle::{
    BuildConfiguration, ChunkSelection, CopyPattern, CopyPluginOptions, FilePattern,
    HtmlMinifyOptions, HtmlPluginOptions, Loader, LoaderOptions, MiniCssExtractOptions, Minimizer,
    ModuleOptions, ModuleRule, OptimizationPolicy, OutputOptions, Plugin, Preset, ResolveOptions,
    SplitChunks, UseEntry,
};
use crate::dev::{DevServer, Devtool};
use crate::mode::{BuildEnv, Mode};
use crate::settings::{ProjectLayout, ProjectSettings};

/// Directory whose scripts are shipped precompiled and never transpiled
const DEPENDENCY_DIR: &str = "node_modules";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigResolver {
    mode: Mode,
    layout: ProjectLayout,
    settings: ProjectSettings,
}

impl ConfigResolver {
    pub fn new(mode: Mode, layout: ProjectLayout, settings: ProjectSettings) -> Self {
        Self {
            mode,
            layout,
            settings,
        }
    }

    /// Resolver for the mode selected by `NODE_ENV`.
    pub fn from_env(env: &BuildEnv, layout: ProjectLayout, settings: ProjectSettings) -> Self {
        Self::new(env.mode(), layout, settings)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_development(&self) -> bool {
        self.mode.is_development()
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Output filename template for `ext`.
    ///
    /// Production names carry a hash placeholder so shipped artifacts are
    /// cache-busted; development names stay stable.
    pub fn filename(&self, ext: &str) -> String {
        if self.is_development() {
            format!("[name].{ext}")
        } else {
            format!("[name].[hash].{ext}")
        }
    }

    /// Shared dependencies are always split into common chunks; minimizers
    /// only run for production, CSS before scripts.
    pub fn optimization(&self) -> OptimizationPolicy {
        let minimizer = if self.is_development() {
            Vec::new()
        } else {
            vec![Minimizer::CssMinimizer, Minimizer::Terser]
        };

        OptimizationPolicy {
            split_chunks: SplitChunks {
                chunks: ChunkSelection::All,
            },
            minimizer,
        }
    }

    /// Style handler chain: extraction and CSS interpretation, then `extras`.
    ///
    /// Chains run last-to-first, so an appended preprocessor such as
    /// [`Loader::Sass`] runs before `css-loader` sees the file.
    pub fn css_loaders(extras: &[Loader]) -> Vec<UseEntry> {
        [Loader::ExtractCss, Loader::Css]
            .into_iter()
            .chain(extras.iter().copied())
            .map(UseEntry::from)
            .collect()
    }

    /// `babel-loader` with the environment preset followed by `extra_presets`.
    pub fn babel_loader(extra_presets: &[Preset]) -> UseEntry {
        let mut presets = Vec::with_capacity(1 + extra_presets.len());
        presets.push(Preset::Env);
        presets.extend_from_slice(extra_presets);

        UseEntry::WithOptions {
            loader: Loader::Babel,
            options: LoaderOptions { presets },
        }
    }

    /// Module rules in evaluation order; the first match handles a file.
    pub fn module_rules(&self) -> Vec<ModuleRule> {
        let dependencies = || FilePattern::builtin(DEPENDENCY_DIR);

        vec![
            ModuleRule::new(FilePattern::builtin(r"\.css$"), Self::css_loaders(&[])),
            ModuleRule::new(
                FilePattern::builtin(r"\.s[ac]ss$"),
                Self::css_loaders(&[Loader::Sass]),
            ),
            ModuleRule::new(
                FilePattern::builtin(r"\.(png|jpg|svg|gif)$"),
                vec![UseEntry::from(Loader::File)],
            ),
            ModuleRule::new(
                FilePattern::builtin(r"\.(ttf|woff2?|eot)$"),
                vec![UseEntry::from(Loader::File)],
            ),
            ModuleRule::new(FilePattern::builtin(r"\.js$"), vec![Self::babel_loader(&[])])
                .excluding(dependencies()),
            ModuleRule::new(
                FilePattern::builtin(r"\.ts(x?)$"),
                vec![Self::babel_loader(&[Preset::TypeScript])],
            )
            .excluding(dependencies()),
            ModuleRule::new(
                FilePattern::builtin(r"\.jsx$"),
                vec![Self::babel_loader(&[Preset::React])],
            )
            .excluding(dependencies()),
        ]
    }

    pub fn plugins(&self) -> Vec<Plugin> {
        vec![
            Plugin::Html(HtmlPluginOptions {
                template: self.settings.html_template.clone(),
                minify: HtmlMinifyOptions {
                    collapse_whitespace: self.mode.is_production(),
                },
            }),
            Plugin::Clean,
            Plugin::CopyFiles(CopyPluginOptions {
                patterns: vec![CopyPattern {
                    from: self.layout.favicon(),
                    to: self.layout.output_dir(),
                }],
            }),
            Plugin::MiniCssExtract(MiniCssExtractOptions {
                filename: self.filename("css"),
            }),
        ]
    }

    pub fn entry(&self) -> IndexMap<String, Vec<String>> {
        IndexMap::from([(
            "main".to_string(),
            vec!["@babel/polyfill".to_string(), "./index.jsx".to_string()],
        )])
    }

    pub fn output(&self) -> OutputOptions {
        OutputOptions {
            filename: self.filename("js"),
            path: self.layout.output_dir(),
        }
    }

    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            extensions: [".js", ".jsx", ".json"].map(String::from).to_vec(),
            alias: self.layout.aliases(),
        }
    }

    pub fn dev_server(&self) -> DevServer {
        DevServer {
            port: self.settings.dev_server_port,
            hot: self.is_development(),
        }
    }

    pub fn devtool(&self) -> Devtool {
        if self.is_development() {
            Devtool::SourceMap
        } else {
            Devtool::Disabled
        }
    }

    /// Assemble the full configuration.
    pub fn resolve(&self) -> BuildConfiguration {
        tracing::debug!(
            mode = %self.mode,
            root = %self.layout.root().display(),
            "resolving build configuration"
        );

        BuildConfiguration {
            context: self.layout.src_dir(),
            mode: self.mode,
            entry: self.entry(),
            output: self.output(),
            resolve: self.resolve_options(),
            optimization: self.optimization(),
            dev_server: self.dev_server(),
            devtool: self.devtool(),
            plugins: self.plugins(),
            module: ModuleOptions {
                rules: self.module_rules(),
            },
        }
    }
}
