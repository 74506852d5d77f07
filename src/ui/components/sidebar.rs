use eframe::egui;

use crate::contact::catalog::{PRODUCTS, format_fcfa, search_in};
use crate::contact::faq::FAQ;
use crate::contact::{
    Category, Product, QUICK_MESSAGES, call_link, order_link, whatsapp_chat_link, whatsapp_link,
};

pub fn render(ui: &mut egui::Ui, search_term: &mut String, recipient: &str) {
    ui.heading("Nos Produits");
    ui.add(egui::TextEdit::singleline(search_term).hint_text("Rechercher un produit..."));
    ui.label(egui::RichText::new(format!("{} produits disponibles", PRODUCTS.len())).weak());
    ui.separator();

    let term = search_term.as_str();
    for category in Category::ALL {
        egui::CollapsingHeader::new(category.label())
            .default_open(category == Category::Kits)
            .show(ui, |ui| {
                ui.label(egui::RichText::new(category.tagline()).italics());
                let mut shown = 0;
                for product in search_in(category, term) {
                    product_card(ui, product, recipient);
                    shown += 1;
                }
                if shown == 0 {
                    ui.label("Aucun produit ne correspond à votre recherche");
                }
            });
    }

    ui.add_space(8.0);
    ui.heading("Messages rapides");
    ui.separator();

    for message in QUICK_MESSAGES {
        ui.hyperlink_to(message, whatsapp_link(recipient, message));
    }

    ui.add_space(8.0);
    ui.heading("Questions fréquentes");
    ui.separator();

    for entry in &FAQ {
        egui::CollapsingHeader::new(entry.question).show(ui, |ui| {
            ui.label(entry.answer);
        });
    }

    ui.add_space(8.0);
    ui.separator();
    ui.hyperlink_to("Ouvrir WhatsApp", whatsapp_chat_link(recipient));
    ui.hyperlink_to("Appeler maintenant", call_link(recipient));
}

fn product_card(ui: &mut egui::Ui, product: &Product, recipient: &str) {
    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.strong(product.title);
            if let Some(badge) = product.badge {
                ui.label(egui::RichText::new(badge).weak());
            }
        });
        ui.horizontal(|ui| {
            ui.label(format_fcfa(product.price));
            if let (Some(original), Some(saving)) = (product.original_price, product.discount()) {
                ui.label(egui::RichText::new(format_fcfa(original)).strikethrough().weak());
                ui.label(format!("-{}", format_fcfa(saving)));
            }
        });
        ui.label(egui::RichText::new(product.description).small());
        ui.hyperlink_to("Commander sur WhatsApp", order_link(product, recipient));
    });
}
