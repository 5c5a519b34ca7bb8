use std::fmt;
use std::str::FromStr;

use fake::Fake;
use fake::faker::address::en::{
    BuildingNumber, CityName, CountryName, PostCode, StateAbbr, StateName, StreetName, ZipCode,
};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::{DomainSuffix, FreeEmail, IPv4, SafeEmail, Username};
use fake::faker::lorem::en::{Sentence, Word, Words};
use fake::faker::name::en::{FirstName, LastName, Name};
use fake::faker::phone_number::en::PhoneNumber;
use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

/// Source of realistic strings for free-text columns.
pub trait SemanticProvider {
    /// Restart the provider's random stream from `seed`.
    fn reseed(&mut self, seed: u64);

    /// Produce one value of the given category.
    fn category(&mut self, category: SemanticCategory) -> String;

    /// Produce exactly `count` generic words.
    fn words(&mut self, count: usize) -> Vec<String>;
}

/// Named free-text subtype a column can be bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SemanticCategory {
    Email,
    SafeEmail,
    FreeEmail,
    UserName,
    DomainSuffix,
    Ipv4,
    Name,
    FirstName,
    FirstNameFemale,
    FirstNameMale,
    LastName,
    Address,
    StreetAddress,
    StreetName,
    BuildingNumber,
    City,
    State,
    StateAbbr,
    Country,
    Postcode,
    Zipcode,
    PhoneNumber,
    Company,
    Word,
    Sentence,
}

impl SemanticCategory {
    pub const ALL: &'static [SemanticCategory] = &[
        Self::Email,
        Self::SafeEmail,
        Self::FreeEmail,
        Self::UserName,
        Self::DomainSuffix,
        Self::Ipv4,
        Self::Name,
        Self::FirstName,
        Self::FirstNameFemale,
        Self::FirstNameMale,
        Self::LastName,
        Self::Address,
        Self::StreetAddress,
        Self::StreetName,
        Self::BuildingNumber,
        Self::City,
        Self::State,
        Self::StateAbbr,
        Self::Country,
        Self::Postcode,
        Self::Zipcode,
        Self::PhoneNumber,
        Self::Company,
        Self::Word,
        Self::Sentence,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::SafeEmail => "safe_email",
            Self::FreeEmail => "free_email",
            Self::UserName => "user_name",
            Self::DomainSuffix => "domain_suffix",
            Self::Ipv4 => "ipv4",
            Self::Name => "name",
            Self::FirstName => "first_name",
            Self::FirstNameFemale => "first_name_female",
            Self::FirstNameMale => "first_name_male",
            Self::LastName => "last_name",
            Self::Address => "address",
            Self::StreetAddress => "street_address",
            Self::StreetName => "street_name",
            Self::BuildingNumber => "building_number",
            Self::City => "city",
            Self::State => "state",
            Self::StateAbbr => "state_abbr",
            Self::Country => "country",
            Self::Postcode => "postcode",
            Self::Zipcode => "zipcode",
            Self::PhoneNumber => "phone_number",
            Self::Company => "company",
            Self::Word => "word",
            Self::Sentence => "sentence",
        }
    }
}

impl fmt::Display for SemanticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown semantic category '{0}'")]
pub struct ParseCategoryError(pub String);

impl FromStr for SemanticCategory {
    type Err = ParseCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| ParseCategoryError(value.to_string()))
    }
}

/// `fake`-backed provider (English locale) over a seeded ChaCha stream.
#[derive(Debug, Clone)]
pub struct FakeProvider {
    rng: ChaCha8Rng,
}

impl FakeProvider {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn street_address(&mut self) -> String {
        let building: String = BuildingNumber().fake_with_rng(&mut self.rng);
        let street: String = StreetName().fake_with_rng(&mut self.rng);
        format!("{building} {street}")
    }

    fn pick_name(&mut self, names: &[&str]) -> String {
        names.choose(&mut self.rng).unwrap_or(&"Alex").to_string()
    }
}

impl SemanticProvider for FakeProvider {
    fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    fn category(&mut self, category: SemanticCategory) -> String {
        match category {
            SemanticCategory::Email | SemanticCategory::SafeEmail => {
                SafeEmail().fake_with_rng(&mut self.rng)
            }
            SemanticCategory::FreeEmail => FreeEmail().fake_with_rng(&mut self.rng),
            SemanticCategory::UserName => Username().fake_with_rng(&mut self.rng),
            SemanticCategory::DomainSuffix => DomainSuffix().fake_with_rng(&mut self.rng),
            SemanticCategory::Ipv4 => IPv4().fake_with_rng(&mut self.rng),
            SemanticCategory::Name => Name().fake_with_rng(&mut self.rng),
            SemanticCategory::FirstName => FirstName().fake_with_rng(&mut self.rng),
            SemanticCategory::FirstNameFemale => self.pick_name(FEMALE_FIRST_NAMES),
            SemanticCategory::FirstNameMale => self.pick_name(MALE_FIRST_NAMES),
            SemanticCategory::LastName => LastName().fake_with_rng(&mut self.rng),
            SemanticCategory::Address => {
                let street = self.street_address();
                let city: String = CityName().fake_with_rng(&mut self.rng);
                let state: String = StateAbbr().fake_with_rng(&mut self.rng);
                let zip: String = ZipCode().fake_with_rng(&mut self.rng);
                format!("{street}, {city}, {state} {zip}")
            }
            SemanticCategory::StreetAddress => self.street_address(),
            SemanticCategory::StreetName => StreetName().fake_with_rng(&mut self.rng),
            SemanticCategory::BuildingNumber => BuildingNumber().fake_with_rng(&mut self.rng),
            SemanticCategory::City => CityName().fake_with_rng(&mut self.rng),
            SemanticCategory::State => StateName().fake_with_rng(&mut self.rng),
            SemanticCategory::StateAbbr => StateAbbr().fake_with_rng(&mut self.rng),
            SemanticCategory::Country => CountryName().fake_with_rng(&mut self.rng),
            SemanticCategory::Postcode => PostCode().fake_with_rng(&mut self.rng),
            SemanticCategory::Zipcode => ZipCode().fake_with_rng(&mut self.rng),
            SemanticCategory::PhoneNumber => PhoneNumber().fake_with_rng(&mut self.rng),
            SemanticCategory::Company => CompanyName().fake_with_rng(&mut self.rng),
            SemanticCategory::Word => Word().fake_with_rng(&mut self.rng),
            SemanticCategory::Sentence => Sentence(3..10).fake_with_rng(&mut self.rng),
        }
    }

    fn words(&mut self, count: usize) -> Vec<String> {
        Words(count..count + 1).fake_with_rng(&mut self.rng)
    }
}

const FEMALE_FIRST_NAMES: &[&str] = &[
    "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan", "Jessica", "Sarah",
    "Karen", "Nancy", "Lisa", "Margaret", "Sandra", "Ashley", "Emily", "Michelle", "Amanda",
    "Melissa", "Rebecca",
];

const MALE_FIRST_NAMES: &[&str] = &[
    "James", "Robert", "John", "Michael", "David", "William", "Richard", "Joseph", "Thomas",
    "Charles", "Christopher", "Daniel", "Matthew", "Anthony", "Mark", "Steven", "Paul", "Andrew",
    "Joshua", "Kevin",
];
