use palette::Srgb;

pub const DEFAULT_FROM: Srgb<u8> = Srgb::new(0x3B, 0x82, 0xF6);
pub const DEFAULT_TO: Srgb<u8> = Srgb::new(0x1D, 0x4E, 0xD8);

const PALETTE: &[(&str, Srgb<u8>)] = &[
    ("blue-500", Srgb::new(0x3B, 0x82, 0xF6)),
    ("blue-700", Srgb::new(0x1D, 0x4E, 0xD8)),
    ("purple-500", Srgb::new(0x8B, 0x5C, 0xF6)),
    ("purple-700", Srgb::new(0x6D, 0x28, 0xD9)),
    ("red-500", Srgb::new(0xEF, 0x44, 0x44)),
    ("red-700", Srgb::new(0xB9, 0x1C, 0x1C)),
    ("emerald-500", Srgb::new(0x10, 0xB9, 0x81)),
    ("emerald-700", Srgb::new(0x04, 0x78, 0x57)),
    ("slate-600", Srgb::new(0x47, 0x55, 0x69)),
    ("slate-800", Srgb::new(0x1E, 0x29, 0x3B)),
    ("orange-500", Srgb::new(0xF9, 0x73, 0x16)),
    ("orange-700", Srgb::new(0xC2, 0x41, 0x0C)),
    ("pink-500", Srgb::new(0xEC, 0x48, 0x99)),
    ("pink-700", Srgb::new(0xBE, 0x18, 0x5D)),
    ("teal-600", Srgb::new(0x0D, 0x94, 0x88)),
    ("teal-800", Srgb::new(0x11, 0x5E, 0x59)),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientColors {
    pub from_color: Srgb<u8>,
    pub to_color: Srgb<u8>,
}

impl GradientColors {
    pub fn from_hex(&self) -> String {
        to_hex(self.from_color)
    }

    pub fn to_hex(&self) -> String {
        to_hex(self.to_color)
    }
}

impl Default for GradientColors {
    fn default() -> Self {
        Self {
            from_color: DEFAULT_FROM,
            to_color: DEFAULT_TO,
        }
    }
}

/// Resolves a gradient class list such as `"from-blue-500 to-blue-700"`.
pub fn extract_gradient_colors(classes: &str) -> GradientColors {
    GradientColors {
        from_color: find_shade(classes, "from-")
            .and_then(lookup)
            .unwrap_or(DEFAULT_FROM),
        to_color: find_shade(classes, "to-")
            .and_then(lookup)
            .unwrap_or(DEFAULT_TO),
    }
}

pub fn lookup(name: &str) -> Option<Srgb<u8>> {
    PALETTE
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, color)| *color)
}

pub fn to_hex(color: Srgb<u8>) -> String {
    format!("#{:02X}{:02X}{:02X}", color.red, color.green, color.blue)
}

/// First `<prefix><word>-<digits>` occurrence, returning `<word>-<digits>`.
fn find_shade<'a>(classes: &'a str, prefix: &str) -> Option<&'a str> {
    classes.match_indices(prefix).find_map(|(at, _)| {
        let rest = &classes[at + prefix.len()..];
        let name_len = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(rest.len());
        if name_len == 0 || !rest[name_len..].starts_with('-') {
            return None;
        }
        let digits = &rest[name_len + 1..];
        let digit_len = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        (digit_len > 0).then(|| &rest[..name_len + 1 + digit_len])
    })
}
