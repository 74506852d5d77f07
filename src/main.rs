mod assistant;
mod common;
mod config;
mod contact;
mod ui;

use std::error::Error;
use std::process::ExitCode;

use assistant::AssistantWorker;
use clap::{Parser, Subcommand, ValueEnum};
use config::AppConfig;
use contact::catalog::{self, PRODUCTS};
use contact::faq::FAQ;
use contact::{Category, ContactForm, Preset, ValidationErrors};
use dotenvy::dotenv;
use tokio::sync::mpsc;
use ui::AssistantApp;

#[derive(Parser)]
#[command(
    name = "iek_assistant",
    version,
    about = "Librairie I.E.K shopping assistant and WhatsApp link builder"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the desktop chat and contact window (default)
    Chat,
    /// Print the assistant's reply to a question
    Ask {
        #[arg(required = true)]
        text: Vec<String>,
        /// Print the reply as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate contact details and print the WhatsApp link
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        message: String,
        /// Send to the secondary number
        #[arg(long)]
        secondary: bool,
    },
    /// Print the WhatsApp link for a canned message
    Link {
        #[arg(value_enum)]
        preset: Preset,
        #[arg(long)]
        secondary: bool,
    },
    /// List every canned message with its WhatsApp link
    Presets {
        #[arg(long)]
        secondary: bool,
    },
    /// List products with their order links
    Catalog {
        #[arg(long, value_enum)]
        category: Option<Category>,
        /// Filter on title or description
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Print the frequently asked questions
    Faq,
    /// Print the tel: link
    Call {
        #[arg(long)]
        secondary: bool,
    },
    /// Write the default config file
    InitConfig,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    // Khởi tạo Logger để debug
    env_logger::init();

    let cli = Cli::parse();
    let app_config = config::load_config(&cli.config);

    let result = match cli.command.unwrap_or(Command::Chat) {
        Command::Chat => run_chat(app_config).await,
        Command::Ask { text, json } => print_reply(&text.join(" "), json),
        Command::Contact {
            name,
            phone,
            message,
            secondary,
        } => {
            let form = ContactForm::new(&name, &phone, &message);
            match contact_link(&form, app_config.recipient(secondary)) {
                Ok(url) => {
                    println!("{url}");
                    Ok(())
                }
                Err(errors) => {
                    for (field, message) in errors.iter() {
                        eprintln!("{field}: {message}");
                    }
                    return ExitCode::FAILURE;
                }
            }
        }
        Command::Link { preset, secondary } => {
            println!("{}", preset.link(app_config.recipient(secondary)));
            Ok(())
        }
        Command::Presets { secondary } => {
            let recipient = app_config.recipient(secondary);
            for preset in Preset::ALL {
                if let Some(value) = preset.to_possible_value() {
                    println!("{:<14} {}", value.get_name(), preset.link(recipient));
                }
            }
            Ok(())
        }
        Command::Catalog { category, search } => {
            print_catalog(category, &search, &app_config.primary_phone);
            Ok(())
        }
        Command::Faq => {
            for entry in &FAQ {
                println!("{}\n{}\n", entry.question, entry.answer);
            }
            Ok(())
        }
        Command::Call { secondary } => {
            println!("{}", contact::call_link(app_config.recipient(secondary)));
            Ok(())
        }
        Command::InitConfig => config::save_config(&cli.config, &AppConfig::default())
            .map(|()| log::info!("Wrote default config to {}", cli.config))
            .map_err(Into::into),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Số mặc định của cửa hàng đi qua `build_contact_link`, số khác qua `build_contact_link_to`.
fn contact_link(form: &ContactForm, recipient: &str) -> Result<String, ValidationErrors> {
    match recipient {
        contact::PRIMARY_RECIPIENT => contact::build_contact_link(form),
        other => contact::build_contact_link_to(form, other),
    }
}

/// `ask --json` output: the matched topic (`null` for the fallback) and the reply.
fn reply_json(text: &str) -> serde_json::Value {
    serde_json::json!({
        "topic": assistant::classify(text),
        "reply": assistant::respond(text),
    })
}

fn print_reply(text: &str, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&reply_json(text))?);
        return Ok(());
    }

    let reply = assistant::respond(text);

    println!("{}", reply.text);
    for (index, quick_reply) in reply.actions.iter().enumerate() {
        println!("  [{}] {}", index + 1, quick_reply.label);
    }
    Ok(())
}

fn print_catalog(category: Option<Category>, term: &str, recipient: &str) {
    let categories = match category {
        Some(category) => vec![category],
        None => Category::ALL.to_vec(),
    };
    let mut shown = 0;
    for category in categories {
        let products: Vec<_> = catalog::search_in(category, term).collect();
        if products.is_empty() {
            continue;
        }
        println!("== {} ==", category.label());
        for product in products {
            let mut price = catalog::format_fcfa(product.price);
            if let Some(saving) = product.discount() {
                price.push_str(&format!(" (-{})", catalog::format_fcfa(saving)));
            }
            println!("{} | {price}", product.title);
            println!("  {}", contact::order_link(product, recipient));
            shown += 1;
        }
    }
    if shown == 0 {
        println!("Aucun produit ne correspond à votre recherche");
    }
    log::debug!("Listed {shown} of {} products", PRODUCTS.len());
}

async fn run_chat(app_config: AppConfig) -> Result<(), Box<dyn Error>> {
    // 1. Tạo các kênh giao tiếp (Channels)
    // UI -> Assistant
    let (cmd_tx, cmd_rx) = mpsc::channel(100);
    // Assistant -> UI
    let (event_tx, event_rx) = mpsc::channel(100);

    // 2. Khởi chạy worker trả lời (Chạy ngầm)
    let worker = AssistantWorker::new(event_tx, cmd_rx, app_config.reply_delay());
    tokio::spawn(worker.run());

    // 3. Khởi chạy UI (Chạy trên Main Thread)
    let options = eframe::NativeOptions::default();
    let mut event_rx = Some(event_rx);
    let recipient = app_config.primary_phone.clone();

    eframe::run_native(
        "Librairie I.E.K",
        options,
        Box::new(move |cc| {
            let event_receiver = event_rx
                .take()
                .expect("AssistantApp should only be initialized once");

            log::info!("Chat window started, contact recipient {recipient}");

            Ok(Box::new(AssistantApp::new(
                cc,
                recipient.clone(),
                cmd_tx.clone(),
                event_receiver,
            )))
        }),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_to_chat() {
        let cli = Cli::try_parse_from(["iek_assistant"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.config, config::DEFAULT_CONFIG_PATH);
    }

    #[test]
    fn cli_parses_contact_and_link() {
        let cli = Cli::try_parse_from([
            "iek_assistant",
            "contact",
            "--name",
            "Jo",
            "--phone",
            "0757608818",
            "--message",
            "Bonjour je voudrais un kit",
            "--secondary",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Contact { secondary: true, .. })
        ));

        let cli = Cli::try_parse_from(["iek_assistant", "link", "kit-3e-4e"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Link {
                preset: Preset::Kit3e4e,
                secondary: false
            })
        ));
    }

    #[test]
    fn cli_parses_catalog_filters() {
        let cli = Cli::try_parse_from([
            "iek_assistant",
            "catalog",
            "--category",
            "cahiers",
            "--search",
            "TP",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Catalog { category, search }) => {
                assert_eq!(category, Some(Category::Cahiers));
                assert_eq!(search, "TP");
            }
            _ => panic!("expected catalog"),
        }

        let cli = Cli::try_parse_from(["iek_assistant", "catalog"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Catalog { category: None, ref search }) if search.is_empty()
        ));
    }

    #[test]
    fn contact_link_uses_configured_recipient() {
        let form = ContactForm::new("Jo", "0757608818", "Bonjour je voudrais un kit");
        let primary = contact_link(&form, contact::PRIMARY_RECIPIENT).unwrap();
        assert_eq!(primary, contact::build_contact_link(&form).unwrap());

        let other = contact_link(&form, "2250100000000").unwrap();
        assert!(other.starts_with("https://wa.me/2250100000000?text="));

        let errors = contact_link(&ContactForm::new("J", "123", "short"), "2250100000000")
            .unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn json_reply_reports_topic() {
        let value = reply_json("Livraison à Cocody ?");
        assert_eq!(value["topic"], "delivery");
        assert!(value["reply"]["text"].as_str().unwrap().contains("livr"));

        let value = reply_json("bonsoir tout le monde");
        assert!(value["topic"].is_null());
        assert_eq!(value["reply"]["actions"][0]["action"]["kind"], "handoff-team");
    }

    #[test]
    fn every_preset_has_a_cli_name() {
        for preset in Preset::ALL {
            let name = preset.to_possible_value().unwrap().get_name().to_string();
            let cli = Cli::try_parse_from(["iek_assistant", "link", name.as_str()]).unwrap();
            assert!(matches!(cli.command, Some(Command::Link { preset: p, .. }) if p == preset));
        }
    }

    #[test]
    fn ask_joins_words() {
        let cli = Cli::try_parse_from(["iek_assistant", "ask", "prix", "du", "kit"]).unwrap();
        match cli.command {
            Some(Command::Ask { text, json }) => {
                assert_eq!(text.join(" "), "prix du kit");
                assert!(!json);
            }
            _ => panic!("expected ask"),
        }
    }
}
