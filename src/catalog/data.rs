// Static inventory

use super::{Breed, Cat, Gender};

pub static CATS: &[Cat] = &[
    Cat {
        id: "c1",
        name: "Luna",
        breed: Breed::Siamese,
        age: 12,
        price: 350,
        gender: Gender::Female,
        description: "Luna is a vocal and affectionate Siamese who loves to be the center of attention. She enjoys puzzle toys and warm laps.",
        image: "https://picsum.photos/id/40/800/800",
        tags: &["Vocal", "Intelligent", "Playful"],
        personality: "Outgoing",
    },
    Cat {
        id: "c2",
        name: "Simba",
        breed: Breed::MaineCoon,
        age: 24,
        price: 500,
        gender: Gender::Male,
        description: "A gentle giant, Simba loves outdoor adventures (on a leash!) and grooming sessions. Great with kids.",
        image: "https://picsum.photos/id/219/800/800",
        tags: &["Large", "Gentle", "Family-friendly"],
        personality: "Calm",
    },
    Cat {
        id: "c3",
        name: "Mochi",
        breed: Breed::ScottishFold,
        age: 6,
        price: 600,
        gender: Gender::Female,
        description: "Tiny folded ears and big round eyes. Mochi is a quiet observer who loves sunny spots.",
        image: "https://picsum.photos/seed/mochi/800/800",
        tags: &["Quiet", "Indoor", "Cute"],
        personality: "Shy",
    },
    Cat {
        id: "c4",
        name: "Oreo",
        breed: Breed::BritishShorthair,
        age: 36,
        price: 400,
        gender: Gender::Male,
        description: "Oreo is independent but loving on his own terms. He has a dense, plush coat that requires minimal grooming.",
        image: "https://picsum.photos/seed/oreo/800/800",
        tags: &["Independent", "Low-maintenance"],
        personality: "Independent",
    },
    Cat {
        id: "c5",
        name: "Bella",
        breed: Breed::Ragdoll,
        age: 18,
        price: 550,
        gender: Gender::Female,
        description: "True to her breed, Bella goes limp when picked up. She is essentially a living plush toy.",
        image: "https://picsum.photos/seed/bella/800/800",
        tags: &["Fluffy", "Cuddly", "Relaxed"],
        personality: "Affectionate",
    },
    Cat {
        id: "c6",
        name: "Leo",
        breed: Breed::Bengal,
        age: 10,
        price: 800,
        gender: Gender::Male,
        description: "Leo is high energy! He needs lots of vertical space and interactive play. Beautiful rosette markings.",
        image: "https://picsum.photos/seed/leo/800/800",
        tags: &["Energetic", "Exotic", "Active"],
        personality: "Energetic",
    },
    Cat {
        id: "c7",
        name: "Cleo",
        breed: Breed::Sphynx,
        age: 15,
        price: 900,
        gender: Gender::Female,
        description: "Hairless and heat-seeking. Cleo will sleep under your covers. Requires weekly baths.",
        image: "https://picsum.photos/seed/cleo/800/800",
        tags: &["Hairless", "Clingy", "Warm"],
        personality: "Clingy",
    },
    Cat {
        id: "c8",
        name: "Shadow",
        breed: Breed::Persian,
        age: 48,
        price: 450,
        gender: Gender::Male,
        description: "Shadow is a dignified gentleman. He prefers a quiet home without too much chaos.",
        image: "https://picsum.photos/seed/shadow/800/800",
        tags: &["Fluffy", "Quiet", "Senior"],
        personality: "Calm",
    },
];
