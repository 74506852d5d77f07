use clap::ValueEnum;

use super::link::whatsapp_link;

/// Nhóm sản phẩm trong catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Category {
    Kits,
    Cahiers,
    Fournitures,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Kits, Category::Cahiers, Category::Fournitures];

    pub fn label(self) -> &'static str {
        match self {
            Category::Kits => "Kits Scolaires",
            Category::Cahiers => "Cahiers",
            Category::Fournitures => "Fournitures",
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            Category::Kits => "Kits complets pour une année scolaire réussie",
            Category::Cahiers => "Cahiers de qualité pour tous vos cours",
            Category::Fournitures => "Fournitures essentielles pour vos études",
        }
    }
}

/// Một sản phẩm, giá tính bằng FCFA.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub category: Category,
    pub title: &'static str,
    pub price: u32,
    pub original_price: Option<u32>,
    pub description: &'static str,
    pub badge: Option<&'static str>,
}

impl Product {
    pub fn discount(&self) -> Option<u32> {
        self.original_price
            .map(|original| original.saturating_sub(self.price))
            .filter(|saving| *saving > 0)
    }

    /// Case-insensitive substring match on the title or the description.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term) || self.description.to_lowercase().contains(&term)
    }

    pub fn order_message(&self) -> String {
        format!(
            "Bonjour, je souhaite commander : {}. Pouvez-vous me donner plus d'informations ?",
            self.title
        )
    }
}

pub static PRODUCTS: [Product; 14] = [
    Product {
        category: Category::Kits,
        title: "Kit Scolaire 6ème/5ème",
        price: 8_100,
        original_price: Some(9_500),
        description: "Cahiers 200p (6 unités), stylos Bic bleu/noir (4 unités), crayons HB (3 unités), gommes (2 unités), règles 30cm, ensemble géométrique complet, couvertures plastiques",
        badge: Some("Populaire"),
    },
    Product {
        category: Category::Kits,
        title: "Kit Scolaire 3ème/4ème",
        price: 10_000,
        original_price: Some(11_800),
        description: "Cahiers 300p (8 unités), fournitures complètes, calculatrice standard, compas de qualité, équerres 45° et 30°, stylos de couleur, surligneurs",
        badge: Some("Recommandé"),
    },
    Product {
        category: Category::Kits,
        title: "Kit Scolaire 2nde/Tle",
        price: 13_000,
        original_price: Some(15_200),
        description: "Cahiers de recherche (4 unités), cahiers TP sciences (6 unités), fournitures premium, calculatrice scientifique, matériel de dessin technique complet",
        badge: Some("Complet"),
    },
    Product {
        category: Category::Cahiers,
        title: "Cahier 200 pages",
        price: 750,
        original_price: None,
        description: "Cahier grand format, papier de qualité, reliure solide. Idéal pour les cours quotidiens.",
        badge: None,
    },
    Product {
        category: Category::Cahiers,
        title: "Cahier 300 pages",
        price: 950,
        original_price: None,
        description: "Cahier extra-large, parfait pour les matières principales et les cours intensifs.",
        badge: None,
    },
    Product {
        category: Category::Cahiers,
        title: "Cahier TP",
        price: 850,
        original_price: None,
        description: "Cahier spécialisé pour travaux pratiques en sciences, avec pages quadrillées.",
        badge: None,
    },
    Product {
        category: Category::Cahiers,
        title: "Cahier Étudiant",
        price: 1_200,
        original_price: None,
        description: "Cahier premium pour étudiants, format A4, spirales métalliques.",
        badge: None,
    },
    Product {
        category: Category::Cahiers,
        title: "Cahier de Recherche",
        price: 1_500,
        original_price: None,
        description: "Cahier spécialisé pour travaux de recherche, papier épais, format universitaire.",
        badge: Some("Premium"),
    },
    Product {
        category: Category::Fournitures,
        title: "Pack Stylos Bic (10 unités)",
        price: 2_500,
        original_price: None,
        description: "Stylos Bic bleu et noir, encre de qualité supérieure, écriture fluide.",
        badge: None,
    },
    Product {
        category: Category::Fournitures,
        title: "Set de Crayons HB (12 unités)",
        price: 1_800,
        original_price: None,
        description: "Crayons à papier de qualité, mine HB, parfaits pour les croquis et l'écriture.",
        badge: None,
    },
    Product {
        category: Category::Fournitures,
        title: "Ensemble Géométrique Complet",
        price: 3_500,
        original_price: None,
        description: "Compas, équerres 45° et 30°, règle graduée, rapporteur. Kit professionnel.",
        badge: Some("Qualité Pro"),
    },
    Product {
        category: Category::Fournitures,
        title: "Pack Gommes et Correcteurs",
        price: 1_200,
        original_price: None,
        description: "Gommes blanches, correcteurs liquides et en stylo. Parfait pour les corrections.",
        badge: None,
    },
    Product {
        category: Category::Fournitures,
        title: "Couvertures Plastiques (20 unités)",
        price: 2_000,
        original_price: None,
        description: "Protection pour cahiers et livres, transparentes et résistantes.",
        badge: None,
    },
    Product {
        category: Category::Fournitures,
        title: "Calculatrice Scientifique",
        price: 8_500,
        original_price: None,
        description: "Calculatrice avancée pour lycéens, fonctions scientifiques complètes.",
        badge: Some("Lycée"),
    },
];

/// An empty term matches everything.
pub fn search(term: &str) -> impl Iterator<Item = &'static Product> + '_ {
    PRODUCTS.iter().filter(move |product| product.matches(term))
}

pub fn search_in(category: Category, term: &str) -> impl Iterator<Item = &'static Product> + '_ {
    search(term).filter(move |product| product.category == category)
}

pub fn order_link(product: &Product, recipient: &str) -> String {
    whatsapp_link(recipient, &product.order_message())
}

/// `8100` -> `"8 100 FCFA"`
pub fn format_fcfa(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    format!("{grouped} FCFA")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::link::PRIMARY_RECIPIENT;

    #[test]
    fn formats_prices_like_the_site() {
        assert_eq!(format_fcfa(8_100), "8 100 FCFA");
        assert_eq!(format_fcfa(13_000), "13 000 FCFA");
        assert_eq!(format_fcfa(500), "500 FCFA");
        assert_eq!(format_fcfa(1_234_567), "1 234 567 FCFA");
    }

    #[test]
    fn catalog_has_three_categories() {
        assert_eq!(PRODUCTS.len(), 14);
        assert_eq!(search_in(Category::Kits, "").count(), 3);
        assert_eq!(search_in(Category::Cahiers, "").count(), 5);
        assert_eq!(search_in(Category::Fournitures, "").count(), 6);
    }

    #[test]
    fn kit_prices_match_chat_replies() {
        let kits_text = crate::assistant::replies::kits().text;
        for kit in search_in(Category::Kits, "") {
            assert!(kits_text.contains(&format_fcfa(kit.price)), "{}", kit.title);
            assert!(kit.discount().is_some());
        }
        assert_eq!(PRODUCTS[0].discount(), Some(1_400));
        assert_eq!(PRODUCTS[3].discount(), None);
    }

    #[test]
    fn search_matches_title_or_description_ignoring_case() {
        let titles: Vec<_> = search("CALCULATRICE").map(|p| p.title).collect();
        assert_eq!(
            titles,
            vec![
                "Kit Scolaire 3ème/4ème",
                "Kit Scolaire 2nde/Tle",
                "Calculatrice Scientifique"
            ]
        );

        // description only
        let titles: Vec<_> = search("quadrillées").map(|p| p.title).collect();
        assert_eq!(titles, vec!["Cahier TP"]);

        assert_eq!(search("").count(), PRODUCTS.len());
        assert_eq!(search("trousse").count(), 0);
    }

    #[test]
    fn search_within_category() {
        let titles: Vec<_> = search_in(Category::Fournitures, "stylo").map(|p| p.title).collect();
        assert_eq!(titles, vec!["Pack Stylos Bic (10 unités)", "Pack Gommes et Correcteurs"]);
    }

    #[test]
    fn order_link_prefills_product_title() {
        let product = &PRODUCTS[5];
        let link = order_link(product, PRIMARY_RECIPIENT);
        assert!(link.starts_with("https://wa.me/2250757608818?text="));

        let (_, encoded) = link.split_once("?text=").unwrap();
        assert_eq!(
            urlencoding::decode(encoded).unwrap(),
            "Bonjour, je souhaite commander : Cahier TP. Pouvez-vous me donner plus d'informations ?"
        );
    }
}
