// src/seed/catalog.rs

use crate::domain::{Complexity, DiagramCategory};

use Complexity::{Advanced, Basic, Intermediate};
use DiagramCategory::{
    BacterialEcology, BacterialGenetics, BacterialMorphology, BacterialReproduction,
    CellularStructure, MetabolicPathways,
};

/// Fixed part of a seeded diagram
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub title: &'static str,
    pub image_slug: &'static str,
    pub category: DiagramCategory,
    pub complexity: Complexity,
}

const fn entry(
    title: &'static str,
    image_slug: &'static str,
    category: DiagramCategory,
    complexity: Complexity,
) -> CatalogEntry {
    CatalogEntry {
        title,
        image_slug,
        category,
        complexity,
    }
}

pub static DIAGRAM_CATALOG: [CatalogEntry; 24] = [
    entry("Gram-Positive Cell Wall Architecture", "gram-positive-cell-wall", CellularStructure, Intermediate),
    entry("Gram-Negative Outer Membrane", "gram-negative-outer-membrane", CellularStructure, Advanced),
    entry("Prokaryotic Cell Overview", "prokaryotic-cell-overview", CellularStructure, Basic),
    entry("Flagellar Motor Assembly", "flagellar-motor", CellularStructure, Advanced),
    entry("Glycolysis in Bacteria", "bacterial-glycolysis", MetabolicPathways, Intermediate),
    entry("Krebs Cycle Overview", "krebs-cycle", MetabolicPathways, Basic),
    entry("Nitrogen Fixation Pathway", "nitrogen-fixation", MetabolicPathways, Advanced),
    entry("Anaerobic Fermentation Routes", "anaerobic-fermentation", MetabolicPathways, Intermediate),
    entry("Cocci Arrangements", "cocci-arrangements", BacterialMorphology, Basic),
    entry("Bacilli Shapes and Chains", "bacilli-shapes", BacterialMorphology, Basic),
    entry("Spirochete Morphology", "spirochete-morphology", BacterialMorphology, Intermediate),
    entry("Endospore Formation Stages", "endospore-formation", BacterialMorphology, Advanced),
    entry("Plasmid Structure Map", "plasmid-map", BacterialGenetics, Basic),
    entry("Conjugation Pilus Transfer", "conjugation-transfer", BacterialGenetics, Intermediate),
    entry("Transduction by Bacteriophage", "phage-transduction", BacterialGenetics, Advanced),
    entry("Operon Regulation Model", "operon-regulation", BacterialGenetics, Intermediate),
    entry("Binary Fission Sequence", "binary-fission", BacterialReproduction, Basic),
    entry("Chromosome Segregation", "chromosome-segregation", BacterialReproduction, Advanced),
    entry("Budding Division Mode", "budding-division", BacterialReproduction, Intermediate),
    entry("Growth Curve Phases", "growth-curve", BacterialReproduction, Basic),
    entry("Biofilm Development Stages", "biofilm-development", BacterialEcology, Intermediate),
    entry("Quorum Sensing Network", "quorum-sensing", BacterialEcology, Advanced),
    entry("Soil Microbiome Interactions", "soil-microbiome", BacterialEcology, Basic),
    entry("Gut Flora Symbiosis", "gut-flora", BacterialEcology, Intermediate),
];

pub const SUBJECTS: [&str; 10] = [
    "Escherichia coli",
    "Staphylococcus aureus",
    "Bacillus subtilis",
    "Pseudomonas aeruginosa",
    "Mycobacterium tuberculosis",
    "Salmonella enterica",
    "Streptococcus pneumoniae",
    "Clostridium difficile",
    "Lactobacillus acidophilus",
    "Vibrio cholerae",
];

pub const TAG_VOCABULARY: [&str; 14] = [
    "microbiology",
    "pathogen",
    "gram-positive",
    "gram-negative",
    "antibiotic",
    "resistance",
    "biofilm",
    "flagella",
    "plasmid",
    "prokaryote",
    "clinical",
    "medical",
    "research",
    "educational",
];

/// Base URL for seeded images
pub const IMAGE_BASE: &str = "https://images.diagram-encyclopedia.org";

impl CatalogEntry {
    pub fn image_url(&self) -> String {
        format!("{}/{}.png", IMAGE_BASE, self.image_slug)
    }

    pub fn thumbnail_url(&self) -> String {
        format!("{}/thumbs/{}.png", IMAGE_BASE, self.image_slug)
    }
}
