//! Static keyword → concept catalog covering the four exam subjects.
//!
//! Keywords are lowercase substring triggers, not tokens: `"kot"` fires inside
//! `"kotdiji"` and `"tan"` fires inside `"important"`. Entry order is significant,
//! it fixes the order in which matched concepts are reported.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use tracing::debug;

/// Separator between concept labels in a catalog value and in extracted output.
pub const LABEL_SEPARATOR: char = ';';

/// Raw catalog data, in reporting order.
const KEYWORD_DATA: &[(&str, &str)] = &[
    // Ancient history: sites
    ("harappan", "Harappan Civilization"),
    ("indus", "Indus Valley Civilization"),
    ("burzahom", "Neolithic Settlements; Kashmir Archaeology"),
    ("chandraketugarh", "Bengal Archaeology; Terracotta Art"),
    ("ganeshwar", "Chalcolithic Culture; Copper Artifacts"),
    ("dholavira", "Harappan Civilization; Water Management"),
    ("chanhudaro", "Harappan Sites"),
    ("sohgaura", "Mauryan Period"),
    ("desalpur", "Harappan Sites"),
    ("kanganahalli", "Mauryan Sculpture; Buddhist Art"),
    ("kot", "Archaeological Sites"),

    // Ancient history: dynasties
    ("maurya", "Mauryan Empire"),
    ("mauryan", "Mauryan Empire"),
    ("ashoka", "Mauryan Empire; Ashokan Edicts"),
    ("gupta", "Gupta Period"),
    ("chola", "Chola Administration"),
    ("pushyabhuti", "Post-Gupta Period"),
    ("maukhari", "Post-Gupta Period"),
    ("empire", "Political History"),
    ("dynasty", "Political History"),
    ("king", "Monarchy; Political History"),
    ("ruler", "Political History"),

    // Ancient history: administration
    ("eripatti", "Chola Administration; Village Revenue"),
    ("taniyur", "Brahmadeya; Land Grants"),
    ("ghatika", "Temple Education"),
    ("vishti", "Forced Labor; Gupta Administration"),
    ("guild", "Ancient Economy; Trade Organizations"),
    ("arthashastra", "Kautilya's Arthashastra; Political Theory"),
    ("kautilya", "Political Theory; Mauryan Administration"),

    // Ancient history: religion
    ("buddhism", "Buddhism"),
    ("buddhist", "Buddhism"),
    ("jainism", "Jainism"),
    ("jain", "Jainism"),
    ("vedic", "Vedic Period"),
    ("rigveda", "Vedic Literature"),
    ("rigvedic", "Early Vedic Period"),
    ("anekantavada", "Jain Philosophy"),
    ("asceticism", "Religious Practices"),
    ("ritual", "Religious Practices"),
    ("yajna", "Vedic Rituals"),

    // Ancient history: literature
    ("panini", "Sanskrit Grammar"),
    ("amarasimha", "Sanskrit Literature"),
    ("kalidasa", "Classical Sanskrit Literature"),
    ("bhavabhuti", "Sanskrit Drama"),
    ("avadanasataka", "Jain Literature"),
    ("dignaga", "Buddhist Philosophy"),
    ("aryadeva", "Buddhist Philosophy"),
    ("nathamuni", "Vaishnavism"),

    // Ancient history: science
    ("surgery", "Ancient Indian Science; Medicine"),
    ("surgical", "Ancient Indian Medicine"),
    ("transplant", "Ancient Surgery"),
    ("sine", "Ancient Mathematics; Trigonometry"),
    ("cyclic", "Ancient Geometry"),
    ("quadrilateral", "Ancient Mathematics"),
    ("aryabhata", "Ancient Mathematics; Astronomy"),
    ("brahmagupta", "Medieval Mathematics"),
    ("metallurgy", "Ancient Technology"),

    // Ancient history: trade
    ("ghantasala", "Maritime Trade; Ancient Ports"),
    ("kadura", "Maritime Trade"),
    ("chaul", "Maritime Trade"),
    ("monsoon", "Maritime Navigation"),
    ("cotton", "Textile Industry; Harappan Economy"),
    ("terracotta", "Material Culture; Art"),
    ("copper", "Chalcolithic Technology"),

    // Ancient history: sources
    ("edict", "Ashokan Edicts; Mauryan Inscriptions"),
    ("inscription", "Epigraphy"),
    ("prinsep", "Epigraphy; Decipherment"),
    ("yuan", "Chinese Travelers; Cultural Exchange"),
    ("excavation", "Archaeological Methods"),
    ("bard", "Oral Tradition; Historiography"),
    ("magadha", "Epic Tradition; Bards"),

    // Mathematics
    ("algebra", "Algebra"),
    ("algebraic", "Algebra"),
    ("equation", "Algebraic Equations"),
    ("polynomial", "Polynomial Functions"),
    ("quadratic", "Quadratic Equations"),
    ("linear", "Linear Algebra"),
    ("matrix", "Linear Algebra; Matrices"),
    ("determinant", "Linear Algebra"),
    ("vector", "Vector Algebra"),

    ("geometry", "Geometry"),
    ("geometric", "Geometry"),
    ("triangle", "Geometry; Triangles"),
    ("circle", "Geometry; Circles"),
    ("angle", "Geometry"),
    ("theorem", "Mathematical Theorems"),
    ("proof", "Mathematical Proofs"),
    ("coordinate", "Coordinate Geometry"),

    ("calculus", "Calculus"),
    ("derivative", "Differential Calculus"),
    ("integral", "Integral Calculus"),
    ("limit", "Limits and Continuity"),
    ("differentiation", "Differential Calculus"),
    ("integration", "Integral Calculus"),
    ("function", "Functions"),

    ("trigonometry", "Trigonometry"),
    ("trigonometric", "Trigonometry"),
    ("sin", "Trigonometric Functions"),
    ("cos", "Trigonometric Functions"),
    ("tan", "Trigonometric Functions"),

    ("probability", "Probability Theory"),
    ("statistics", "Statistics"),
    ("distribution", "Statistical Distributions"),
    ("mean", "Descriptive Statistics"),
    ("variance", "Statistical Measures"),
    ("standard", "Statistical Analysis"),

    // Physics
    ("mechanics", "Classical Mechanics"),
    ("motion", "Kinematics; Dynamics"),
    ("force", "Newton's Laws; Forces"),
    ("acceleration", "Kinematics"),
    ("velocity", "Kinematics"),
    ("momentum", "Momentum and Collision"),
    ("energy", "Energy and Work"),
    ("work", "Work and Energy"),
    ("power", "Work, Energy and Power"),
    ("newton", "Newton's Laws"),

    ("thermodynamics", "Thermodynamics"),
    ("heat", "Heat and Temperature"),
    ("temperature", "Thermodynamics"),
    ("entropy", "Thermodynamics"),
    ("gas", "Kinetic Theory of Gases"),
    ("pressure", "Fluid Properties"),

    ("electromagnetism", "Electromagnetism"),
    ("electric", "Electric Fields and Potential"),
    ("magnetic", "Magnetism"),
    ("current", "Electric Current"),
    ("voltage", "Electric Potential"),
    ("circuit", "Electric Circuits"),
    ("resistance", "Electrical Resistance"),
    ("capacitor", "Capacitance"),
    ("inductor", "Electromagnetic Induction"),

    ("wave", "Wave Physics"),
    ("frequency", "Wave Properties"),
    ("wavelength", "Wave Properties"),
    ("amplitude", "Wave Properties"),
    ("sound", "Sound Waves"),
    ("light", "Optics; Light"),
    ("optics", "Optics"),
    ("lens", "Geometrical Optics"),
    ("mirror", "Reflection of Light"),
    ("refraction", "Refraction of Light"),

    ("quantum", "Quantum Physics"),
    ("photon", "Quantum Physics"),
    ("electron", "Atomic Physics"),
    ("atom", "Atomic Structure"),
    ("nuclear", "Nuclear Physics"),
    ("radioactive", "Nuclear Physics"),

    ("relativity", "Theory of Relativity"),
    ("einstein", "Modern Physics; Relativity"),
    ("spacetime", "Special Relativity"),

    // Economics
    ("demand", "Demand Theory"),
    ("supply", "Supply Theory"),
    ("market", "Market Economics"),
    ("price", "Price Theory"),
    ("elasticity", "Price Elasticity"),
    ("competition", "Market Structure"),
    ("monopoly", "Market Structure"),
    ("oligopoly", "Market Structure"),

    ("inflation", "Monetary Economics"),
    ("deflation", "Monetary Economics"),
    ("gdp", "National Income"),
    ("gnp", "National Income"),
    ("fiscal", "Fiscal Policy"),
    ("monetary", "Monetary Policy"),
    ("budget", "Public Finance"),
    ("tax", "Public Finance; Taxation"),
    ("subsidy", "Government Intervention"),

    ("trade", "International Trade"),
    ("export", "International Trade"),
    ("import", "International Trade"),
    ("exchange", "Foreign Exchange"),
    ("currency", "Monetary System"),
    ("balance", "Balance of Payments"),

    ("employment", "Labor Economics"),
    ("unemployment", "Labor Economics"),
    ("wage", "Labor Economics"),
    ("labor", "Labor Economics"),

    ("investment", "Investment Theory"),
    ("saving", "Savings and Investment"),
    ("capital", "Capital Formation"),
    ("interest", "Interest Rate Theory"),
    ("bank", "Banking and Finance"),
    ("credit", "Credit and Banking"),

    ("development", "Economic Development"),
    ("growth", "Economic Growth"),
    ("poverty", "Development Economics"),
    ("inequality", "Income Distribution"),
];

/// One keyword and the concepts it implies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordEntry {
    pub keyword: &'static str,
    pub labels: Vec<&'static str>,
}

/// Ordered, immutable keyword → concepts mapping.
#[derive(Debug)]
pub struct KeywordCatalog {
    entries: Vec<KeywordEntry>,
}

static CATALOG: Lazy<KeywordCatalog> = Lazy::new(|| KeywordCatalog::from_pairs(KEYWORD_DATA));

/// The process-wide catalog. Built on first use, never mutated.
pub fn lookup() -> &'static KeywordCatalog {
    &CATALOG
}

impl KeywordCatalog {
    /// Build a catalog from `(keyword, "Label A; Label B")` pairs.
    ///
    /// A repeated keyword keeps its first position and value.
    pub fn from_pairs(pairs: &[(&'static str, &'static str)]) -> Self {
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(pairs.len());

        for &(keyword, value) in pairs {
            if !seen.insert(keyword) {
                debug!("Ignoring repeated catalog keyword {:?} ({})", keyword, value);
                continue;
            }
            entries.push(KeywordEntry {
                keyword,
                labels: split_labels(value).collect(),
            });
        }

        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeywordEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Concepts for an exact keyword.
    pub fn get(&self, keyword: &str) -> Option<&[&'static str]> {
        self.entries
            .iter()
            .find(|e| e.keyword == keyword)
            .map(|e| e.labels.as_slice())
    }
}

/// Split a `;`-joined label string into trimmed, non-empty labels.
pub fn split_labels(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(LABEL_SEPARATOR)
        .map(str::trim)
        .filter(|label| !label.is_empty())
}
