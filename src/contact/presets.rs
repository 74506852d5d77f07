use clap::ValueEnum;

use super::link::whatsapp_link;

/// Tin nhắn WhatsApp soạn sẵn cho các nút đặt hàng trên site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    General,
    #[value(name = "kit-6e-5e")]
    Kit6e5e,
    #[value(name = "kit-3e-4e")]
    Kit3e4e,
    #[value(name = "kit-2nde-tle")]
    Kit2ndeTle,
    Fournitures,
    Livraison,
    Prix,
    Contact,
}

impl Preset {
    pub const ALL: [Preset; 8] = [
        Preset::General,
        Preset::Kit6e5e,
        Preset::Kit3e4e,
        Preset::Kit2ndeTle,
        Preset::Fournitures,
        Preset::Livraison,
        Preset::Prix,
        Preset::Contact,
    ];

    pub fn text(self) -> &'static str {
        match self {
            Preset::General => {
                "Bonjour ! Je viens du site Librairie I.E.K et j'aimerais avoir des informations sur vos kits scolaires."
            }
            Preset::Kit6e5e => {
                "Bonjour ! Je viens du site Librairie I.E.K et je suis intéressé(e) par le kit scolaire 6e/5e à 8100F. Pouvez-vous me donner plus de détails ?"
            }
            Preset::Kit3e4e => {
                "Bonjour ! Je viens du site Librairie I.E.K et je suis intéressé(e) par le kit scolaire 3e/4e à 10000F. Pouvez-vous me donner plus de détails ?"
            }
            Preset::Kit2ndeTle => {
                "Bonjour ! Je viens du site Librairie I.E.K et je suis intéressé(e) par le kit scolaire 2nde/Tle à 13000F. Pouvez-vous me donner plus de détails ?"
            }
            Preset::Fournitures => {
                "Bonjour ! Je viens du site Librairie I.E.K et j'aimerais acheter des fournitures scolaires à l'unité. Que proposez-vous ?"
            }
            Preset::Livraison => {
                "Bonjour ! Je viens du site Librairie I.E.K et j'aimerais savoir comment fonctionne votre service de livraison."
            }
            Preset::Prix => {
                "Bonjour ! Je viens du site Librairie I.E.K et j'aimerais avoir plus d'informations sur vos prix."
            }
            Preset::Contact => {
                "Bonjour ! Je vous contacte depuis le site Librairie I.E.K. J'ai quelques questions à vous poser."
            }
        }
    }

    pub fn link(self, recipient: &str) -> String {
        whatsapp_link(recipient, self.text())
    }
}

/// "Messages rapides" shown next to the contact form.
pub const QUICK_MESSAGES: [&str; 4] = [
    "Je souhaite commander un kit scolaire",
    "J'aimerais avoir un devis personnalisé",
    "Quels sont vos délais de livraison ?",
    "Avez-vous des promotions en cours ?",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::link::PRIMARY_RECIPIENT;

    #[test]
    fn preset_link_round_trips_text() {
        for preset in Preset::ALL {
            let link = preset.link(PRIMARY_RECIPIENT);
            let (_, encoded) = link.split_once("?text=").unwrap();
            assert_eq!(urlencoding::decode(encoded).unwrap(), preset.text());
        }
    }

    #[test]
    fn kit_presets_quote_catalog_prices() {
        assert!(Preset::Kit6e5e.text().contains("8100F"));
        assert!(Preset::Kit3e4e.text().contains("10000F"));
        assert!(Preset::Kit2ndeTle.text().contains("13000F"));
    }

    #[test]
    fn preset_names_parse_from_cli() {
        assert_eq!(Preset::from_str("kit-6e-5e", true), Ok(Preset::Kit6e5e));
        assert_eq!(Preset::from_str("KIT-2NDE-TLE", true), Ok(Preset::Kit2ndeTle));
        assert_eq!(Preset::from_str("livraison", false), Ok(Preset::Livraison));
    }
}
