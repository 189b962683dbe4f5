use crate::color::{GradientColors, extract_gradient_colors};
use crate::device::DeviceClass;
use strum::{Display as StrumDisplay, EnumIter};

/// Glyph shown on a tile. Rendering decides how to draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, StrumDisplay)]
pub enum Icon {
    UserCheck,
    Shield,
    FileText,
    AlertTriangle,
    Briefcase,
    CarFront,
    Heart,
    Copyright,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    /// Gradient classes, e.g. `from-blue-500 to-blue-700`.
    pub gradient: &'static str,
    pub background: &'static str,
}

impl Feature {
    pub fn colors(&self) -> GradientColors {
        extract_gradient_colors(self.gradient)
    }
}

pub static FEATURES: [Feature; 8] = [
    Feature {
        icon: Icon::UserCheck,
        title: "Declarație pe propria răspundere",
        description: "Pentru utilizatorii ocazionali care au nevoie de clarificări privind documentele juridice.",
        gradient: "from-blue-500 to-blue-700",
        background: "bg-blue-50/80",
    },
    Feature {
        icon: Icon::Shield,
        title: "Analiză Detaliată",
        description: "Primește o analiză juridică detaliată a documentelor tale, evidențiind drepturi, obligații și potențiale probleme.",
        gradient: "from-purple-500 to-purple-700",
        background: "bg-purple-50/80",
    },
    Feature {
        icon: Icon::FileText,
        title: "Contestație amendă",
        description: "Generează o contestație pentru o amendă primită.",
        gradient: "from-red-500 to-red-700",
        background: "bg-red-50/80",
    },
    Feature {
        icon: Icon::AlertTriangle,
        title: "Reclamație protecția consumatorului",
        description: "Creează o reclamație pentru protecția drepturilor consumatorului.",
        gradient: "from-emerald-500 to-emerald-700",
        background: "bg-emerald-50/80",
    },
    Feature {
        icon: Icon::Briefcase,
        title: "Contract de închiriere",
        description: "Creează un contract de închiriere personalizat pentru proprietatea ta.",
        gradient: "from-slate-600 to-slate-800",
        background: "bg-slate-50/80",
    },
    Feature {
        icon: Icon::CarFront,
        title: "Contract vânzare-cumpărare auto",
        description: "Creează un contract pentru vânzarea sau cumpărarea unui autovehicul.",
        gradient: "from-orange-500 to-orange-700",
        background: "bg-orange-50/80",
    },
    Feature {
        icon: Icon::Heart,
        title: "Cerere de divorț",
        description: "Pregătește documentele necesare pentru divorț.",
        gradient: "from-pink-500 to-pink-700",
        background: "bg-pink-50/80",
    },
    Feature {
        icon: Icon::Copyright,
        title: "Înregistrare marcă",
        description: "Pregătește documentele pentru înregistrarea unei mărci.",
        gradient: "from-teal-600 to-teal-800",
        background: "bg-teal-50/80",
    },
];

pub fn visible_features(device: DeviceClass) -> &'static [Feature] {
    let count = device.layout().visible_tiles.min(FEATURES.len());
    &FEATURES[..count]
}
