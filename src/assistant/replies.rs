//! Câu trả lời soạn sẵn của trợ lý (tiếng Pháp, dữ liệu catalogue cố định).

use crate::common::{QuickReply, Reply, ReplyAction};

const WELCOME_TEXT: &str = "👋 Bienvenue chez Librairie I.E.K ! Je suis là pour vous aider avec vos \
questions sur nos fournitures scolaires. Comment puis-je vous renseigner ?";

const KITS_TEXT: &str = "📚 Nos kits scolaires complets :\n\
\n\
• **6e / 5e** → 8 100 FCFA\n\
• **3e / 4e** → 10 000 FCFA\n\
• **2nde / Tle** → 13 000 FCFA\n\
\n\
Chaque kit contient tout le nécessaire pour une année scolaire réussie ! 🎒";

const PRICES_TEXT: &str = "💰 **Nos tarifs détaillés :**\n\
\n\
**Kits complets :**\n\
• 6e/5e : 8 100 F\n\
• 3e/4e : 10 000 F\n\
• 2nde/Tle : 13 000 F\n\
\n\
**Fournitures individuelles :**\n\
• Cahier 100p : 500 F\n\
• Cahier 200p : 900 F\n\
• Cahier 300p : 1 800 F\n\
• Bic : 100 F\n\
• Crayon : 100 F\n\
• Ensemble géométrie : 700-1000 F\n\
\n\
Prix transparents, sans frais cachés ! ✅";

const ORDERING_TEXT: &str = "📱 **Comment commander c'est simple :**\n\
\n\
1. Cliquez sur \"Commander sur WhatsApp\"\n\
2. Envoyez-nous votre choix\n\
3. Nous préparons votre commande\n\
4. Livraison rapide ! 🚚\n\
\n\
**Paiement :** Orange Money, Wave, MTN, Espèces\n\
**Livraison :** Partout à Abidjan et environs";

const CONTACT_TEXT: &str = "📞 **Nos contacts :**\n\
\n\
WhatsApp & Appels :\n\
• 07 57 60 88 18\n\
• 05 55 78 29 44\n\
\n\
📍 **Nos points de vente :**\n\
• Kakoukro, Carrefour Marché\n\
• Adiaké, quartier Gnanmiendoussou\n\
\n\
🕒 **Horaires :** Lun-Sam 8h-19h";

const DELIVERY_TEXT: &str = "🚚 **Livraison & Paiement :**\n\
\n\
**Zones de livraison :** Abidjan et environs\n\
**Délais :** Livraison rapide et fiable\n\
**Frais :** Selon zone géographique\n\
\n\
**Moyens de paiement :**\n\
• Orange Money 📱\n\
• Wave 💳\n\
• MTN Mobile Money\n\
• Espèces à la livraison 💰\n\
\n\
Paiement sécurisé garanti !";

const SUPPLIES_TEXT: &str = "📝 **Nos fournitures disponibles :**\n\
\n\
• Cahiers (100p, 200p, 300p)\n\
• Bics (bleu, rouge, noir, vert)\n\
• Crayons à papier et de couleur\n\
• Matériel de géométrie\n\
• Colle, scotch, effaceurs...\n\
\n\
Tout pour réussir votre année scolaire ! 📚";

const GREETING_TEXT: &str = "Bonjour ! 👋 Bienvenue chez Librairie I.E.K ! Je suis là pour vous aider. \
Que souhaitez-vous savoir sur nos fournitures scolaires ?";

const FALLBACK_TEXT: &str = "Je vous remercie pour votre question ! 😊\n\
\n\
Pour une réponse personnalisée et détaillée, je vous invite à contacter directement notre équipe \
via WhatsApp. Nous serons ravis de vous aider !\n\
\n\
Voici les sujets sur lesquels je peux vous renseigner :\n\
• Kits scolaires et prix\n\
• Fournitures individuelles\n\
• Modalités de commande\n\
• Livraison et paiement";

pub const HANDOFF_KIT_ORDER_TEXT: &str =
    "Parfait ! Cliquez sur le bouton WhatsApp ci-dessous pour commander directement :";
pub const HANDOFF_ORDER_TEXT: &str =
    "Excellente idée ! Utilisez le bouton WhatsApp pour commander :";
pub const HANDOFF_TEAM_TEXT: &str =
    "Parfait ! Cliquez sur le bouton WhatsApp pour discuter directement avec notre équipe :";

/// Lời chào khi người dùng mở cửa sổ chat lần đầu.
pub fn welcome() -> Reply {
    Reply::with_actions(
        WELCOME_TEXT,
        vec![
            QuickReply::new("Voir les kits scolaires", ReplyAction::ShowKits),
            QuickReply::new("Connaître les prix", ReplyAction::ShowPrices),
            QuickReply::new("Comment commander", ReplyAction::ShowOrdering),
        ],
    )
}

pub fn kits() -> Reply {
    Reply::text(KITS_TEXT)
}

/// Kit list as returned for a kit question, with the order hand-off attached.
pub fn kits_with_order() -> Reply {
    Reply::with_actions(
        KITS_TEXT,
        vec![QuickReply::new(
            "Commander un kit",
            ReplyAction::HandoffKitOrder,
        )],
    )
}

pub fn prices() -> Reply {
    Reply::text(PRICES_TEXT)
}

pub fn ordering() -> Reply {
    Reply::text(ORDERING_TEXT)
}

pub fn ordering_with_handoff() -> Reply {
    Reply::with_actions(
        ORDERING_TEXT,
        vec![QuickReply::new(
            "Commander maintenant",
            ReplyAction::HandoffOrder,
        )],
    )
}

pub fn contact() -> Reply {
    Reply::text(CONTACT_TEXT)
}

pub fn delivery() -> Reply {
    Reply::text(DELIVERY_TEXT)
}

pub fn supplies() -> Reply {
    Reply::text(SUPPLIES_TEXT)
}

pub fn greeting() -> Reply {
    Reply::with_actions(
        GREETING_TEXT,
        vec![
            QuickReply::new("Voir les kits", ReplyAction::ShowKits),
            QuickReply::new("Les prix", ReplyAction::ShowPrices),
        ],
    )
}

pub fn fallback() -> Reply {
    Reply::with_actions(
        FALLBACK_TEXT,
        vec![QuickReply::new(
            "Contacter sur WhatsApp",
            ReplyAction::HandoffTeam,
        )],
    )
}

impl ReplyAction {
    /// Bảng dispatch: mỗi action tạo đúng một tin nhắn bot tiếp theo.
    pub fn resolve(self) -> Reply {
        match self {
            ReplyAction::ShowKits => kits(),
            ReplyAction::ShowPrices => prices(),
            ReplyAction::ShowOrdering => ordering(),
            ReplyAction::HandoffKitOrder => Reply::text(HANDOFF_KIT_ORDER_TEXT),
            ReplyAction::HandoffOrder => Reply::text(HANDOFF_ORDER_TEXT),
            ReplyAction::HandoffTeam => Reply::text(HANDOFF_TEAM_TEXT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_offers_three_topics() {
        let reply = welcome();
        let actions: Vec<_> = reply.actions.iter().map(|a| a.action).collect();
        assert_eq!(
            actions,
            vec![
                ReplyAction::ShowKits,
                ReplyAction::ShowPrices,
                ReplyAction::ShowOrdering
            ]
        );
    }

    #[test]
    fn handoffs_resolve_to_distinct_texts() {
        let kit = ReplyAction::HandoffKitOrder.resolve();
        let order = ReplyAction::HandoffOrder.resolve();
        let team = ReplyAction::HandoffTeam.resolve();
        assert_eq!(kit.text, HANDOFF_KIT_ORDER_TEXT);
        assert_eq!(order.text, HANDOFF_ORDER_TEXT);
        assert_eq!(team.text, HANDOFF_TEAM_TEXT);
        assert!(kit.actions.is_empty() && order.actions.is_empty() && team.actions.is_empty());
    }

    #[test]
    fn show_actions_reuse_topic_texts_without_quick_replies() {
        assert_eq!(ReplyAction::ShowKits.resolve().text, kits_with_order().text);
        assert!(ReplyAction::ShowKits.resolve().actions.is_empty());
        assert_eq!(ReplyAction::ShowPrices.resolve(), prices());
        assert_eq!(ReplyAction::ShowOrdering.resolve(), ordering());
    }

    #[test]
    fn templates_are_multiline() {
        assert!(kits().text.contains("\n\n• **6e / 5e** → 8 100 FCFA\n"));
        assert!(prices().text.contains("• Cahier 300p : 1 800 F\n"));
        assert!(contact().text.ends_with("🕒 **Horaires :** Lun-Sam 8h-19h"));
        assert!(fallback().text.starts_with("Je vous remercie pour votre question ! 😊\n\nPour"));
    }
}
