//! The literal color table every catalog is built from.
//!
//! Fifteen families, nine `(hex, "r, g, b")` pairs each, lightest first,
//! plus the recommended intensity for light and dark backgrounds. Display
//! names are the ones shown in the card form.
//!
//! This is data, not logic. [`Catalog::build`](crate::catalog::Catalog::build)
//! validates every entry (hex format, rgb agreement, recommendation subsets)
//! before anything is exposed.

/// One family as authored: the raw input to catalog construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilyDef {
    pub name: &'static str,
    pub display_name: &'static str,
    /// `(hex, "r, g, b")` for 100 through 900.
    pub variants: [(&'static str, &'static str); 9],
    /// Recommended intensity on light backgrounds (500, 600 or 700).
    pub light: u16,
    /// Recommended intensity on dark backgrounds (400, 500 or 600).
    pub dark: u16,
}

/// Family used when a requested one does not exist.
pub const FALLBACK_FAMILY: &str = "pink";

/// All builtin families, in display order.
pub const FAMILIES: [FamilyDef; 15] = [
    FamilyDef {
        name: "pink",
        display_name: "Rosa",
        variants: [
            ("#fce7f3", "252, 231, 243"),
            ("#fbcfe8", "251, 207, 232"),
            ("#f9a8d4", "249, 168, 212"),
            ("#f472b6", "244, 114, 182"),
            ("#ec4899", "236, 72, 153"),
            ("#db2777", "219, 39, 119"),
            ("#be185d", "190, 24, 93"),
            ("#9d174d", "157, 23, 77"),
            ("#831843", "131, 24, 67"),
        ],
        light: 500,
        dark: 400,
    },
    FamilyDef {
        name: "red",
        display_name: "Rojo",
        variants: [
            ("#fee2e2", "254, 226, 226"),
            ("#fecaca", "254, 202, 202"),
            ("#fca5a5", "252, 165, 165"),
            ("#f87171", "248, 113, 113"),
            ("#ef4444", "239, 68, 68"),
            ("#dc2626", "220, 38, 38"),
            ("#b91c1c", "185, 28, 28"),
            ("#991b1b", "153, 27, 27"),
            ("#7f1d1d", "127, 29, 29"),
        ],
        light: 500,
        dark: 400,
    },
    FamilyDef {
        name: "orange",
        display_name: "Naranja",
        variants: [
            ("#ffedd5", "255, 237, 213"),
            ("#fed7aa", "254, 215, 170"),
            ("#fdba74", "253, 186, 116"),
            ("#fb923c", "251, 146, 60"),
            ("#f97316", "249, 115, 22"),
            ("#ea580c", "234, 88, 12"),
            ("#c2410c", "194, 65, 12"),
            ("#9a3412", "154, 52, 18"),
            ("#7c2d12", "124, 45, 18"),
        ],
        light: 500,
        dark: 400,
    },
    FamilyDef {
        name: "amber",
        display_name: "Ámbar",
        variants: [
            ("#fef3c7", "254, 243, 199"),
            ("#fde68a", "253, 230, 138"),
            ("#fcd34d", "252, 211, 77"),
            ("#fbbf24", "251, 191, 36"),
            ("#f59e0b", "245, 158, 11"),
            ("#d97706", "217, 119, 6"),
            ("#b45309", "180, 83, 9"),
            ("#92400e", "146, 64, 14"),
            ("#78350f", "120, 53, 15"),
        ],
        light: 500,
        dark: 400,
    },
    FamilyDef {
        name: "yellow",
        display_name: "Amarillo",
        variants: [
            ("#fef9c3", "254, 249, 195"),
            ("#fef08a", "254, 240, 138"),
            ("#fde047", "253, 224, 71"),
            ("#facc15", "250, 204, 21"),
            ("#eab308", "234, 179, 8"),
            ("#ca8a04", "202, 138, 4"),
            ("#a16207", "161, 98, 7"),
            ("#854d0e", "133, 77, 14"),
            ("#713f12", "113, 63, 18"),
        ],
        light: 500,
        dark: 400,
    },
    FamilyDef {
        name: "lime",
        display_name: "Lima",
        variants: [
            ("#ecfccb", "236, 252, 203"),
            ("#d9f99d", "217, 249, 157"),
            ("#bef264", "190, 242, 100"),
            ("#a3e635", "163, 230, 53"),
            ("#84cc16", "132, 204, 22"),
            ("#65a30d", "101, 163, 13"),
            ("#4d7c0f", "77, 124, 15"),
            ("#3f6212", "63, 98, 18"),
            ("#365314", "54, 83, 20"),
        ],
        light: 600,
        dark: 500,
    },
    FamilyDef {
        name: "green",
        display_name: "Verde",
        variants: [
            ("#dcfce7", "220, 252, 231"),
            ("#bbf7d0", "187, 247, 208"),
            ("#86efac", "134, 239, 172"),
            ("#4ade80", "74, 222, 128"),
            ("#22c55e", "34, 197, 94"),
            ("#16a34a", "22, 163, 74"),
            ("#15803d", "21, 128, 61"),
            ("#166534", "22, 101, 52"),
            ("#14532d", "20, 83, 45"),
        ],
        light: 500,
        dark: 400,
    },
    FamilyDef {
        name: "emerald",
        display_name: "Esmeralda",
        variants: [
            ("#d1fae5", "209, 250, 229"),
            ("#a7f3d0", "167, 243, 208"),
            ("#6ee7b7", "110, 231, 183"),
            ("#34d399", "52, 211, 153"),
            ("#10b981", "16, 185, 129"),
            ("#059669", "5, 150, 105"),
            ("#047857", "4, 120, 87"),
            ("#065f46", "6, 95, 70"),
            ("#064e3b", "6, 78, 59"),
        ],
        light: 500,
        dark: 400,
    },
    FamilyDef {
        name: "teal",
        display_name: "Turquesa",
        variants: [
            ("#ccfbf1", "204, 251, 241"),
            ("#99f6e4", "153, 246, 228"),
            ("#5eead4", "94, 234, 212"),
            ("#2dd4bf", "45, 212, 191"),
            ("#14b8a6", "20, 184, 166"),
            ("#0d9488", "13, 148, 136"),
            ("#0f766e", "15, 118, 110"),
            ("#115e59", "17, 94, 89"),
            ("#134e4a", "19, 78, 74"),
        ],
        light: 500,
        dark: 400,
    },
    FamilyDef {
        name: "cyan",
        display_name: "Cian",
        variants: [
            ("#cffafe", "207, 250, 254"),
            ("#a5f3fc", "165, 243, 252"),
            ("#67e8f9", "103, 232, 249"),
            ("#22d3ee", "34, 211, 238"),
            ("#06b6d4", "6, 182, 212"),
            ("#0891b2", "8, 145, 178"),
            ("#0e7490", "14, 116, 144"),
            ("#155e75", "21, 94, 117"),
            ("#164e63", "22, 78, 99"),
        ],
        light: 500,
        dark: 400,
    },
    FamilyDef {
        name: "sky",
        display_name: "Cielo",
        variants: [
            ("#e0f2fe", "224, 242, 254"),
            ("#bae6fd", "186, 230, 253"),
            ("#7dd3fc", "125, 211, 252"),
            ("#38bdf8", "56, 189, 248"),
            ("#0ea5e9", "14, 165, 233"),
            ("#0284c7", "2, 132, 199"),
            ("#0369a1", "3, 105, 161"),
            ("#075985", "7, 89, 133"),
            ("#0c4a6e", "12, 74, 110"),
        ],
        light: 500,
        dark: 400,
    },
    FamilyDef {
        name: "blue",
        display_name: "Azul",
        variants: [
            ("#dbeafe", "219, 234, 254"),
            ("#bfdbfe", "191, 219, 254"),
            ("#93c5fd", "147, 197, 253"),
            ("#60a5fa", "96, 165, 250"),
            ("#3b82f6", "59, 130, 246"),
            ("#2563eb", "37, 99, 235"),
            ("#1d4ed8", "29, 78, 216"),
            ("#1e40af", "30, 64, 175"),
            ("#1e3a8a", "30, 58, 138"),
        ],
        light: 500,
        dark: 400,
    },
    FamilyDef {
        name: "indigo",
        display_name: "Índigo",
        variants: [
            ("#e0e7ff", "224, 231, 255"),
            ("#c7d2fe", "199, 210, 254"),
            ("#a5b4fc", "165, 180, 252"),
            ("#818cf8", "129, 140, 248"),
            ("#6366f1", "99, 102, 241"),
            ("#4f46e5", "79, 70, 229"),
            ("#4338ca", "67, 56, 202"),
            ("#3730a3", "55, 48, 163"),
            ("#312e81", "49, 46, 129"),
        ],
        light: 600,
        dark: 500,
    },
    FamilyDef {
        name: "purple",
        display_name: "Púrpura",
        variants: [
            ("#f3e8ff", "243, 232, 255"),
            ("#e9d5ff", "233, 213, 255"),
            ("#d8b4fe", "216, 180, 254"),
            ("#c084fc", "192, 132, 252"),
            ("#a855f7", "168, 85, 247"),
            ("#9333ea", "147, 51, 234"),
            ("#7e22ce", "126, 34, 206"),
            ("#6b21a8", "107, 33, 168"),
            ("#581c87", "88, 28, 135"),
        ],
        light: 600,
        dark: 500,
    },
    FamilyDef {
        name: "fuchsia",
        display_name: "Fucsia",
        variants: [
            ("#fae8ff", "250, 232, 255"),
            ("#f5d0fe", "245, 208, 254"),
            ("#f0abfc", "240, 171, 252"),
            ("#e879f9", "232, 121, 249"),
            ("#d946ef", "217, 70, 239"),
            ("#c026d3", "192, 38, 211"),
            ("#a21caf", "162, 28, 175"),
            ("#86198f", "134, 25, 143"),
            ("#701a75", "112, 26, 117"),
        ],
        light: 500,
        dark: 400,
    },
];

/// Look up a builtin family definition by name.
#[must_use]
pub fn family_def(name: &str) -> Option<&'static FamilyDef> {
    FAMILIES.iter().find(|def| def.name == name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
