//! Static page content: breed catalog, characteristics, fact accordion
//!
//! Everything here is fixed at compile time and never mutated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Breed identifier from the fixed catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Breed {
    Siamese,
    Persian,
    MaineCoon,
    Bengal,
    ScottishFold,
}

impl Breed {
    /// All breeds in catalog order
    pub const ALL: [Breed; 5] = [
        Breed::Siamese,
        Breed::Persian,
        Breed::MaineCoon,
        Breed::Bengal,
        Breed::ScottishFold,
    ];

    /// Identifier used in image URLs
    pub fn slug(&self) -> &'static str {
        match self {
            Breed::Siamese => "siamese",
            Breed::Persian => "persian",
            Breed::MaineCoon => "maine-coon",
            Breed::Bengal => "bengal",
            Breed::ScottishFold => "scottish-fold",
        }
    }

    /// The catalog record for this breed
    pub fn record(&self) -> &'static BreedRecord {
        &BREEDS[self.index()]
    }

    fn index(&self) -> usize {
        match self {
            Breed::Siamese => 0,
            Breed::Persian => 1,
            Breed::MaineCoon => 2,
            Breed::Bengal => 3,
            Breed::ScottishFold => 4,
        }
    }
}

impl fmt::Display for Breed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Breed {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Breed::ALL
            .iter()
            .copied()
            .find(|b| b.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown breed: {}", s))
    }
}

/// Static descriptive entry for one breed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedRecord {
    pub breed: Breed,
    pub name: &'static str,
    pub image_url: &'static str,
    pub description: &'static str,
}

/// The breed catalog, in carousel order
pub static BREEDS: [BreedRecord; 5] = [
    BreedRecord {
        breed: Breed::Siamese,
        name: "Siamese",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/2/25/Siam_lilacpoint.jpg/320px-Siam_lilacpoint.jpg",
        description: "Vocal and social, with striking blue eyes and a sleek pointed coat.",
    },
    BreedRecord {
        breed: Breed::Persian,
        name: "Persian",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/1/15/White_Persian_Cat.jpg/320px-White_Persian_Cat.jpg",
        description: "Calm and affectionate, known for a long luxurious coat and flat face.",
    },
    BreedRecord {
        breed: Breed::MaineCoon,
        name: "Maine Coon",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/5/5f/Maine_Coon_cat_by_Tomitheos.JPG/320px-Maine_Coon_cat_by_Tomitheos.JPG",
        description: "A gentle giant with a shaggy coat, tufted ears, and a friendly nature.",
    },
    BreedRecord {
        breed: Breed::Bengal,
        name: "Bengal",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/b/ba/Paintedcats_Red_Star_standing.jpg/320px-Paintedcats_Red_Star_standing.jpg",
        description: "Energetic and playful, with a wild-looking spotted or marbled coat.",
    },
    BreedRecord {
        breed: Breed::ScottishFold,
        name: "Scottish Fold",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/5/5d/Adult_Scottish_Fold.jpg/320px-Adult_Scottish_Fold.jpg",
        description: "Sweet-tempered and adaptable, recognized by its folded ears.",
    },
];

/// Hero banner background
pub const HERO_IMAGE_URL: &str = "https://images.unsplash.com/photo-1514888286974-6c03e2ca1dba?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80";
pub const HERO_TITLE: &str = "All About Cats";
pub const HERO_SUBTITLE: &str = "Discover the fascinating world of our feline friends";

/// "Characteristics of Cats" bullet list
pub const CHARACTERISTICS: [&str; 5] = [
    "Independent nature",
    "Excellent hunters with sharp claws and teeth",
    "Flexible bodies and quick reflexes",
    "Keen senses, especially hearing and night vision",
    "Communicate through vocalizations, body language, and scent",
];

/// One entry of the static fact accordion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticFact {
    pub title: &'static str,
    pub body: &'static str,
}

pub const STATIC_FACTS: [StaticFact; 3] = [
    StaticFact {
        title: "Sleeping Habits",
        body: "Cats sleep for 70% of their lives.",
    },
    StaticFact {
        title: "Unique Noses",
        body: "A cat's nose print is unique, like a human's fingerprint.",
    },
    StaticFact {
        title: "Powerful Jump",
        body: "Cats can jump up to six times their length.",
    },
];

pub const FOOTER_COPYRIGHT: &str = "© 2023 CatWorld. All rights reserved.";
pub const FOOTER_TAGLINE: &str = "Made with ♥ for cat lovers everywhere.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_matches_breed_all() {
        for (i, breed) in Breed::ALL.iter().enumerate() {
            assert_eq!(BREEDS[i].breed, *breed);
            assert_eq!(breed.record().breed, *breed);
        }
    }

    #[test]
    fn test_breed_slugs_round_trip() {
        assert_eq!("maine-coon".parse::<Breed>(), Ok(Breed::MaineCoon));
        assert_eq!("Scottish-Fold".parse::<Breed>(), Ok(Breed::ScottishFold));
        assert!("sphynx".parse::<Breed>().is_err());
        assert_eq!(Breed::Bengal.to_string(), "bengal");
    }

    #[test]
    fn test_breed_serde_uses_slug() {
        let json = serde_json::to_string(&Breed::MaineCoon).unwrap();
        assert_eq!(json, "\"maine-coon\"");
    }

    #[test]
    fn test_records_are_populated() {
        for record in BREEDS.iter() {
            assert!(!record.name.is_empty());
            assert!(record.image_url.starts_with("https://"));
            assert!(!record.description.is_empty());
        }
    }
}
