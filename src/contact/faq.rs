/// Câu hỏi thường gặp của cửa hàng.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQ: [FaqEntry; 10] = [
    FaqEntry {
        question: "Qui sommes-nous ?",
        answer: "Nous sommes Librairie I.E.K, une boutique spécialisée dans les fournitures scolaires. \
Notre mission est simple : rendre la rentrée scolaire facile, rapide et abordable pour tous. \
Chaque kit est soigneusement préparé pour que vos enfants commencent l'année dans les meilleures conditions.",
    },
    FaqEntry {
        question: "Que trouve-t-on chez vous ?",
        answer: "• Des kits scolaires complets (du collège au lycée)\n\
• Des fournitures individuelles : cahiers, bics, ensembles géométriques, gommes, couvertures plastiques, etc.\n\
• Des produits fiables et durables, testés et validés par des milliers d'élèves chaque année.",
    },
    FaqEntry {
        question: "Quels sont vos prix ?",
        answer: "Nous pratiquons des tarifs transparents et accessibles :\n\
• 6e / 5e → 8100 F\n\
• 3e / 4e → 10 000 F\n\
• 2nde / Tle → 13 000 F\n\
👉 La qualité au meilleur prix, sans frais cachés.",
    },
    FaqEntry {
        question: "Comment commander ?",
        answer: "C'est très simple ✅\n\
• Cliquez sur le bouton \"Commander sur WhatsApp\"\n\
• Envoyez-nous votre choix (kit ou fournitures à l'unité)\n\
• Et nous préparons immédiatement votre commande 📦",
    },
    FaqEntry {
        question: "Quels moyens de paiement acceptez-vous ?",
        answer: "• Orange Money\n\
• Wave\n\
• MTN Mobile Money\n\
• Espèces à la livraison\n\
💳 Vous payez comme vous voulez, en toute sécurité.",
    },
    FaqEntry {
        question: "Livrez-vous à domicile ?",
        answer: "Oui 🚚 ! Nous livrons partout à Abidjan et ses environs.\n\
⏱ Livraison rapide, fiable, et possibilité de paiement à la livraison.",
    },
    FaqEntry {
        question: "Puis-je personnaliser ma commande ?",
        answer: "Bien sûr 🤝 ! Vous pouvez acheter :\n\
• Un kit complet déjà prêt 📦\n\
• Ou choisir vos fournitures une par une 🖊️📓",
    },
    FaqEntry {
        question: "Vos fournitures sont-elles de bonne qualité ?",
        answer: "Oui ✅ ! Nous sélectionnons uniquement des produits durables et résistants \
pour accompagner vos enfants toute l'année scolaire.",
    },
    FaqEntry {
        question: "Comment vous contacter ?",
        answer: "📲 WhatsApp & Appels :\n\
• 0757608818\n\
• 0555782944\n\
\n\
Toujours disponibles pour répondre à vos questions.",
    },
    FaqEntry {
        question: "Pourquoi choisir Librairie I.E.K ?",
        answer: "• Prix imbattables 💰\n\
• Kits complets prêts à l'emploi 🎒\n\
• Livraison rapide 🚀\n\
• Commande ultra simple via WhatsApp 📲\n\
• Service client disponible 24/7 💬\n\
\n\
👉 Chez nous, préparer la rentrée devient un plaisir, pas un stress !",
    },
];
