use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use eyre::WrapErr;
use serde_json::{json, Value};
use wallet_locale_adapters::{load_overrides_file, WalletLocaleConfig};
use wallet_locale_core::{
    check_overrides, connect_button_text, DiagnosticMode, DropdownBasenameProps,
    DropdownBasenameView, DropdownText, LocaleProvider, SupportedWallets, WalletModalOptions,
    WalletModalProps, WalletModalView,
};

use crate::report;

#[derive(Debug, Parser)]
#[command(
    name = "wallet-text",
    about = "Inspect and preview wallet widget text overrides",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print every text key with its resolved text.
    Show(ShowArgs),

    /// List override keys this build does not know.
    Check(CheckArgs),

    /// Print the modal and dropdown text for a configuration.
    Preview(PreviewArgs),
}

#[derive(Debug, Args)]
pub struct SourceArgs {
    /// JSON object of text overrides (defaults to $WALLET_LOCALE_OVERRIDES).
    #[arg(long)]
    pub overrides: Option<PathBuf>,

    /// Skip unknown-key warnings.
    #[arg(long)]
    pub production: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Emit the merged map as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    pub file: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OptInWallet {
    Rabby,
    Trust,
    Frame,
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[arg(long)]
    pub no_sign_up: bool,

    /// Basename returned by the name lookup, if any.
    #[arg(long)]
    pub basename: Option<String>,

    #[arg(long)]
    pub terms_url: Option<String>,

    #[arg(long)]
    pub privacy_url: Option<String>,

    #[arg(long)]
    pub app_name: Option<String>,

    #[arg(long = "enable-wallet", value_enum)]
    pub wallets: Vec<OptInWallet>,
}

pub fn run(cli: Cli) -> eyre::Result<()> {
    match cli.command {
        Commands::Show(args) => run_show(args),
        Commands::Check(args) => run_check(args),
        Commands::Preview(args) => run_preview(args),
    }
}

fn build_provider(source: &SourceArgs) -> eyre::Result<LocaleProvider> {
    let config = WalletLocaleConfig::from_env().wrap_err("invalid environment")?;
    provider_for(config, source)
}

/// Applies command-line flags on top of `config`.
fn provider_for(
    mut config: WalletLocaleConfig,
    source: &SourceArgs,
) -> eyre::Result<LocaleProvider> {
    if let Some(path) = &source.overrides {
        config.overrides_path = Some(path.clone());
    }
    if source.production {
        config.diagnostics = DiagnosticMode::Production;
    }
    config.provider().wrap_err("failed to load overrides")
}

fn run_show(args: ShowArgs) -> eyre::Result<()> {
    let provider = build_provider(&args.source)?;
    if args.json {
        println!("{}", show_json(&provider)?);
    } else {
        print!("{}", report::render_table(&provider.active()));
    }
    Ok(())
}

fn show_json(provider: &LocaleProvider) -> eyre::Result<String> {
    Ok(serde_json::to_string_pretty(&*provider.active())?)
}

fn run_check(args: CheckArgs) -> eyre::Result<()> {
    let config = WalletLocaleConfig::from_env().wrap_err("invalid environment")?;
    let count = check_file(&args.file, config.max_overrides_bytes)?;
    println!("{}: {count} override(s), all keys known", args.file.display());
    Ok(())
}

/// Number of overrides in `path`; an error naming every unknown key otherwise.
fn check_file(path: &Path, limit: usize) -> eyre::Result<usize> {
    let overrides = load_overrides_file(path, limit)
        .wrap_err_with(|| format!("failed to load {}", path.display()))?;

    let diagnostics = check_overrides(&overrides);
    if !diagnostics.is_empty() {
        let keys: Vec<_> = diagnostics.iter().map(|d| d.key.as_str()).collect();
        eyre::bail!(
            "{} unknown key(s) in {}: {}",
            diagnostics.len(),
            path.display(),
            keys.join(", ")
        );
    }
    Ok(overrides.len())
}

fn run_preview(args: PreviewArgs) -> eyre::Result<()> {
    let provider = build_provider(&args.source)?;
    let preview = preview_json(args, &provider);
    println!("{}", serde_json::to_string_pretty(&preview)?);
    Ok(())
}

fn preview_json(args: PreviewArgs, provider: &LocaleProvider) -> Value {
    let ctx = provider.scope();
    let resolver = ctx.resolver();

    let options = WalletModalOptions {
        sign_up_enabled: !args.no_sign_up,
        terms_url: args.terms_url,
        privacy_url: args.privacy_url,
        app_name: args.app_name,
        supported_wallets: SupportedWallets {
            rabby: args.wallets.contains(&OptInWallet::Rabby),
            trust: args.wallets.contains(&OptInWallet::Trust),
            frame: args.wallets.contains(&OptInWallet::Frame),
        },
    };
    let modal = WalletModalView::build(&resolver, &WalletModalProps::default(), &options);
    let basename = DropdownBasenameView::build(
        &resolver,
        &DropdownBasenameProps::default(),
        args.basename.as_deref(),
    );
    let wallets: Vec<_> = modal
        .wallets
        .iter()
        .map(|w| json!({ "id": w.id(), "name": w.name() }))
        .collect();

    json!({
        "connectButton": connect_button_text(&resolver, None),
        "modal": modal,
        "walletNames": wallets,
        "dropdown": {
            "entries": DropdownText::resolve(&resolver),
            "basename": basename,
        },
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn overrides_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write overrides");
        file
    }

    fn preview_args(argv: &[&str]) -> PreviewArgs {
        let cli = Cli::try_parse_from(argv).expect("parse arguments");
        match cli.command {
            Commands::Preview(args) => args,
            other => panic!("expected preview, got {other:?}"),
        }
    }

    #[test]
    fn check_fails_on_unknown_key() {
        let file = overrides_file(r#"{"bogusKey":"x","walletModalTitle":"Sign In"}"#);
        let err = check_file(file.path(), 1024).expect_err("unknown key must fail");
        let message = err.to_string();
        assert!(message.contains("1 unknown key(s)"), "{message}");
        assert!(message.contains("bogusKey"), "{message}");
    }

    #[test]
    fn check_passes_on_known_keys() {
        let file =
            overrides_file(r#"{"walletModalTitle":"Sign In","walletDropdownNew":"NEU"}"#);
        assert_eq!(check_file(file.path(), 1024).expect("clean file"), 2);
    }

    #[test]
    fn check_reports_unreadable_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = check_file(&dir.path().join("absent.json"), 1024).expect_err("must fail");
        assert!(err.to_string().contains("failed to load"));
    }

    #[test]
    fn check_subcommand_parses_file() {
        let cli = Cli::try_parse_from(["wallet-text", "check", "texts.json"]).expect("parse");
        assert!(matches!(
            cli.command,
            Commands::Check(ref args) if args.file == Path::new("texts.json")
        ));
    }

    #[test]
    fn show_json_is_flat_and_ordered() {
        let file = overrides_file(r#"{"walletModalTitle":"Sign In","aaa":"extra"}"#);
        let source = SourceArgs {
            overrides: Some(file.path().to_path_buf()),
            production: true,
        };
        let provider =
            provider_for(WalletLocaleConfig::default(), &source).expect("build provider");
        let json = show_json(&provider).expect("render json");

        let value: Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["walletModalTitle"], "Sign In");
        assert_eq!(value["walletDropdownNew"], "NEW");
        assert_eq!(value["aaa"], "extra");
        let first = json.find("connectWalletButton").expect("first known key");
        let last = json.find("walletDropdownNew").expect("last known key");
        let extra = json.find("\"aaa\"").expect("extra key");
        assert!(first < last && last < extra);
    }

    #[test]
    fn preview_maps_sign_up_and_basename_flags() {
        let args = preview_args(&[
            "wallet-text",
            "preview",
            "--no-sign-up",
            "--basename",
            "alice.base.eth",
            "--enable-wallet",
            "frame",
        ]);
        let preview = preview_json(args, &LocaleProvider::default());

        assert_eq!(preview["modal"]["signUpButton"], Value::Null);
        assert_eq!(preview["modal"]["divider"], "Connect your wallet");
        assert_eq!(preview["modal"]["wallets"][3], "frame");
        assert_eq!(preview["dropdown"]["basename"]["title"], "Profile");
        assert_eq!(
            preview["dropdown"]["basename"]["href"],
            "https://www.base.org/name/alice.base.eth"
        );
        assert_eq!(preview["connectButton"], "Connect Wallet");
    }

    #[test]
    fn preview_defaults_offer_sign_up_and_claim() {
        let args = preview_args(&["wallet-text", "preview"]);
        let preview = preview_json(args, &LocaleProvider::default());

        assert_eq!(preview["modal"]["signUpButton"], "Sign up");
        assert_eq!(preview["modal"]["divider"], "or continue with an existing wallet");
        assert_eq!(preview["dropdown"]["basename"]["badge"], "NEW");
        assert_eq!(preview["walletNames"].as_array().map(Vec::len), Some(3));
    }
}
