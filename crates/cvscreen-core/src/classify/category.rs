//! The fixed 21-category taxonomy and its priority order.

use serde::{Deserialize, Serialize};

/// Semantic group a category rolls up into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryGroup {
    /// Candidates, applications, interviews.
    Recruitment,
    /// Clients, quotes, invoices, partners.
    Business,
    /// Newsletters, events, trainings, system mail.
    Communication,
    /// Promotions and spam.
    Undesirable,
    /// Catch-alls awaiting review.
    Unclassified,
}

impl CategoryGroup {
    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Recruitment => "Recrutement",
            Self::Business => "Business",
            Self::Communication => "Communication",
            Self::Undesirable => "Indésirable",
            Self::Unclassified => "Non classé",
        }
    }
}

/// One of the 21 fixed email categories of the recruiting mailbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailCategory {
    // Recruitment
    /// Unsolicited application with a CV.
    CvSpontane,
    /// Application answering a published job offer.
    ReponseOffre,
    /// Internship application.
    DemandeStage,
    /// Candidate following up on an application.
    RelanceCandidat,
    /// Interview scheduling or confirmation.
    Entretien,
    /// Reference or recommendation about a candidate.
    ReferenceCandidat,
    /// Rejection sent to or received about a candidate.
    RefusCandidat,
    // Business
    /// First contact from a prospective client.
    NouveauClient,
    /// Quote request.
    DemandeDevis,
    /// Invoice or payment matter.
    Facture,
    /// Partnership proposal.
    Partenariat,
    /// Supplier or service-provider exchange.
    Prestataire,
    // Communication
    /// HR or industry newsletter.
    NewsletterRh,
    /// Event invitation.
    InvitationEvenement,
    /// Training announcement or enrollment.
    Formation,
    /// Automated system notification.
    NotificationSysteme,
    /// General information request.
    DemandeInformation,
    // Undesirable
    /// Advertising or promotional mail.
    PubPromo,
    /// Unsolicited junk.
    Spam,
    // Catch-alls
    /// Could not be classified.
    NonClasse,
    /// Classified, but with confidence below the doubt threshold.
    Doute,
}

/// Tie-break priority order: recruitment first, then business,
/// communication, undesirable, with the catch-alls last and `doute` very
/// last. Position in this table is the rank used by
/// [`priority_category`](crate::classify::priority_category).
pub const PRIORITY_ORDER: [EmailCategory; 21] = [
    EmailCategory::CvSpontane,
    EmailCategory::ReponseOffre,
    EmailCategory::DemandeStage,
    EmailCategory::RelanceCandidat,
    EmailCategory::Entretien,
    EmailCategory::ReferenceCandidat,
    EmailCategory::RefusCandidat,
    EmailCategory::NouveauClient,
    EmailCategory::DemandeDevis,
    EmailCategory::Facture,
    EmailCategory::Partenariat,
    EmailCategory::Prestataire,
    EmailCategory::NewsletterRh,
    EmailCategory::InvitationEvenement,
    EmailCategory::Formation,
    EmailCategory::NotificationSysteme,
    EmailCategory::DemandeInformation,
    EmailCategory::PubPromo,
    EmailCategory::Spam,
    EmailCategory::NonClasse,
    EmailCategory::Doute,
];

impl EmailCategory {
    /// Parse from the wire string representation.
    ///
    /// Unknown labels fall back to [`EmailCategory::NonClasse`], so a model
    /// inventing a label never breaks classification.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "cv_spontane" => Self::CvSpontane,
            "reponse_offre" => Self::ReponseOffre,
            "demande_stage" => Self::DemandeStage,
            "relance_candidat" => Self::RelanceCandidat,
            "entretien" => Self::Entretien,
            "reference_candidat" => Self::ReferenceCandidat,
            "refus_candidat" => Self::RefusCandidat,
            "nouveau_client" => Self::NouveauClient,
            "demande_devis" => Self::DemandeDevis,
            "facture" => Self::Facture,
            "partenariat" => Self::Partenariat,
            "prestataire" => Self::Prestataire,
            "newsletter_rh" => Self::NewsletterRh,
            "invitation_evenement" => Self::InvitationEvenement,
            "formation" => Self::Formation,
            "notification_systeme" => Self::NotificationSysteme,
            "demande_information" => Self::DemandeInformation,
            "pub_promo" => Self::PubPromo,
            "spam" => Self::Spam,
            "doute" => Self::Doute,
            _ => Self::NonClasse,
        }
    }

    /// Convert to the wire string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CvSpontane => "cv_spontane",
            Self::ReponseOffre => "reponse_offre",
            Self::DemandeStage => "demande_stage",
            Self::RelanceCandidat => "relance_candidat",
            Self::Entretien => "entretien",
            Self::ReferenceCandidat => "reference_candidat",
            Self::RefusCandidat => "refus_candidat",
            Self::NouveauClient => "nouveau_client",
            Self::DemandeDevis => "demande_devis",
            Self::Facture => "facture",
            Self::Partenariat => "partenariat",
            Self::Prestataire => "prestataire",
            Self::NewsletterRh => "newsletter_rh",
            Self::InvitationEvenement => "invitation_evenement",
            Self::Formation => "formation",
            Self::NotificationSysteme => "notification_systeme",
            Self::DemandeInformation => "demande_information",
            Self::PubPromo => "pub_promo",
            Self::Spam => "spam",
            Self::NonClasse => "non_classe",
            Self::Doute => "doute",
        }
    }

    /// The semantic group this category rolls up into.
    #[must_use]
    pub const fn group(&self) -> CategoryGroup {
        match self {
            Self::CvSpontane
            | Self::ReponseOffre
            | Self::DemandeStage
            | Self::RelanceCandidat
            | Self::Entretien
            | Self::ReferenceCandidat
            | Self::RefusCandidat => CategoryGroup::Recruitment,
            Self::NouveauClient
            | Self::DemandeDevis
            | Self::Facture
            | Self::Partenariat
            | Self::Prestataire => CategoryGroup::Business,
            Self::NewsletterRh
            | Self::InvitationEvenement
            | Self::Formation
            | Self::NotificationSysteme
            | Self::DemandeInformation => CategoryGroup::Communication,
            Self::PubPromo | Self::Spam => CategoryGroup::Undesirable,
            Self::NonClasse | Self::Doute => CategoryGroup::Unclassified,
        }
    }

    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::CvSpontane => "Candidature spontanée",
            Self::ReponseOffre => "Réponse à offre",
            Self::DemandeStage => "Demande de stage",
            Self::RelanceCandidat => "Relance candidat",
            Self::Entretien => "Entretien",
            Self::ReferenceCandidat => "Référence candidat",
            Self::RefusCandidat => "Refus candidat",
            Self::NouveauClient => "Nouveau client",
            Self::DemandeDevis => "Demande de devis",
            Self::Facture => "Facture",
            Self::Partenariat => "Partenariat",
            Self::Prestataire => "Prestataire",
            Self::NewsletterRh => "Newsletter RH",
            Self::InvitationEvenement => "Invitation événement",
            Self::Formation => "Formation",
            Self::NotificationSysteme => "Notification système",
            Self::DemandeInformation => "Demande d'information",
            Self::PubPromo => "Publicité / Promotion",
            Self::Spam => "Spam",
            Self::NonClasse => "Non classé",
            Self::Doute => "Doute",
        }
    }

    /// Rank in [`PRIORITY_ORDER`]; lower wins ties.
    #[must_use]
    pub fn priority_rank(&self) -> usize {
        PRIORITY_ORDER
            .iter()
            .position(|c| c == self)
            .unwrap_or(PRIORITY_ORDER.len())
    }
}

impl std::str::FromStr for EmailCategory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
