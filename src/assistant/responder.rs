use serde::Serialize;

use crate::common::Reply;

use super::replies;

/// Chủ đề mà một câu hỏi được xếp vào, theo thứ tự ưu tiên.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Kits,
    Prices,
    Ordering,
    Contact,
    Delivery,
    Supplies,
    Greeting,
}

impl Topic {
    pub fn reply(self) -> Reply {
        match self {
            Topic::Kits => replies::kits_with_order(),
            Topic::Prices => replies::prices(),
            Topic::Ordering => replies::ordering_with_handoff(),
            Topic::Contact => replies::contact(),
            Topic::Delivery => replies::delivery(),
            Topic::Supplies => replies::supplies(),
            Topic::Greeting => replies::greeting(),
        }
    }
}

/// A rule fires when the lowercased input contains any of its keywords.
#[derive(Debug)]
pub struct KeywordRule {
    pub topic: Topic,
    pub keywords: &'static [&'static str],
}

impl KeywordRule {
    fn matches(&self, normalized: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| normalized.contains(keyword))
    }
}

/// First match wins, so kits outrank the generic price question.
pub const RULES: &[KeywordRule] = &[
    KeywordRule {
        topic: Topic::Kits,
        keywords: &["kit", "scolaire", "6e", "5e", "3e", "4e", "2nde", "tle"],
    },
    KeywordRule {
        topic: Topic::Prices,
        keywords: &["prix", "coût", "tarif", "combien"],
    },
    KeywordRule {
        topic: Topic::Ordering,
        keywords: &["commander", "acheter", "commande"],
    },
    KeywordRule {
        topic: Topic::Contact,
        keywords: &["contact", "téléphone", "adresse", "où"],
    },
    KeywordRule {
        topic: Topic::Delivery,
        keywords: &["livraison", "livrer", "paiement", "payer"],
    },
    KeywordRule {
        topic: Topic::Supplies,
        keywords: &["fourniture", "cahier", "bic", "crayon"],
    },
    KeywordRule {
        topic: Topic::Greeting,
        keywords: &["salut", "bonjour", "hello"],
    },
];

/// Returns the topic of the first matching rule, or `None` for the fallback.
pub fn classify(input: &str) -> Option<Topic> {
    let normalized = input.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&normalized))
        .map(|rule| rule.topic)
}

pub fn respond(input: &str) -> Reply {
    match classify(input) {
        Some(topic) => {
            log::debug!("Input matched topic {topic:?}");
            topic.reply()
        }
        None => {
            log::debug!("No keyword rule matched, using fallback");
            replies::fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ReplyAction;

    #[test]
    fn kit_and_level_tokens_pick_kits() {
        for input in ["kit", "scolaire", "6e", "5e", "3e", "4e", "2nde", "Tle"] {
            assert_eq!(classify(input), Some(Topic::Kits), "input: {input}");
        }
    }

    #[test]
    fn casing_does_not_change_output() {
        assert_eq!(respond("KIT scolaire"), respond("kit scolaire"));
        assert_eq!(respond("KIT scolaire"), replies::kits_with_order());
    }

    #[test]
    fn kit_outranks_price() {
        assert_eq!(classify("prix du kit 6e"), Some(Topic::Kits));
        let reply = respond("prix du kit 6e");
        assert_eq!(reply.actions.len(), 1);
        assert_eq!(reply.actions[0].action, ReplyAction::HandoffKitOrder);
    }

    #[test]
    fn each_rule_reachable_in_order() {
        assert_eq!(classify("Combien ça coûte ?"), Some(Topic::Prices));
        assert_eq!(classify("C'est quel tarif ?"), Some(Topic::Prices));
        assert_eq!(classify("Je veux acheter"), Some(Topic::Ordering));
        assert_eq!(classify("Votre adresse ?"), Some(Topic::Contact));
        assert_eq!(classify("Vous êtes où ?"), Some(Topic::Contact));
        assert_eq!(classify("Livraison possible ?"), Some(Topic::Delivery));
        assert_eq!(classify("Avez-vous des cahiers ?"), Some(Topic::Supplies));
        assert_eq!(classify("Hello"), Some(Topic::Greeting));
    }

    #[test]
    fn earlier_rule_wins_on_overlap() {
        // "commander" + "prix": prices come first
        assert_eq!(classify("quel prix pour commander"), Some(Topic::Prices));
        // greeting loses to contact
        assert_eq!(classify("Bonjour, où êtes-vous ?"), Some(Topic::Contact));
        // "payer" loses to ordering
        assert_eq!(classify("commande et payer"), Some(Topic::Ordering));
    }

    #[test]
    fn uppercase_accented_keywords_are_lowercased() {
        assert_eq!(classify("TÉLÉPHONE"), Some(Topic::Contact));
        assert_eq!(classify("COÛT"), Some(Topic::Prices));
    }

    #[test]
    fn no_accent_folding() {
        assert_eq!(classify("cout"), None);
        assert_eq!(classify("telephone"), None);
    }

    #[test]
    fn unmatched_input_gets_fallback_with_handoff() {
        assert_eq!(classify("bonsoir tout le monde"), None);
        let reply = respond("bonsoir tout le monde");
        assert_eq!(reply, replies::fallback());
        assert_eq!(reply.actions.len(), 1);
        assert_eq!(reply.actions[0].action, ReplyAction::HandoffTeam);
    }

    #[test]
    fn greeting_offers_kits_and_prices() {
        let reply = respond("salut");
        let actions: Vec<_> = reply.actions.iter().map(|a| a.action).collect();
        assert_eq!(actions, vec![ReplyAction::ShowKits, ReplyAction::ShowPrices]);
    }

    #[test]
    fn ordering_carries_handoff() {
        let reply = respond("Comment passer une commande ?");
        assert_eq!(reply.actions[0].action, ReplyAction::HandoffOrder);
    }

    #[test]
    fn respond_is_deterministic() {
        for input in ["kit", "prix", "xyz", "bonjour", ""] {
            assert_eq!(respond(input), respond(input));
        }
    }

    #[test]
    fn every_keyword_selects_its_own_rule() {
        for rule in RULES {
            for keyword in rule.keywords {
                assert_eq!(classify(keyword), Some(rule.topic), "keyword: {keyword}");
                let shouted = keyword.to_uppercase();
                assert_eq!(classify(&shouted), Some(rule.topic), "keyword: {shouted}");
                let framed = format!("dites-moi, {keyword} ?");
                assert_eq!(classify(&framed), Some(rule.topic), "input: {framed}");
            }
        }
    }

    #[test]
    fn empty_input_falls_back() {
        assert_eq!(classify(""), None);
    }
}
