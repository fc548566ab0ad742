//! The resolved character.
//!
//! Generation fills a [`CharacterBuilder`] field by field and freezes it
//! with [`CharacterBuilder::build`]. A [`Character`] is never observed
//! half-resolved and never changes afterwards.

use serde::Serialize;
use tracing::debug;

use crate::error::{GenError, GenResult};
use crate::origin::CulturalOrigin;
use crate::pronoun::{Pronouns, Sex};
use crate::relations::{Enemy, Friend, LoveInterest};
use crate::resolver::Resolver;
use crate::roles::{RoleKind, RoleProfile};

/// Common attributes in the order they are rolled.
pub const COMMON_ATTRIBUTES: [&str; 12] = [
    "personality",
    "clothing_style",
    "hairstyle",
    "affectation",
    "motivation",
    "relationships",
    "most_valued_person",
    "most_valued_possession",
    "family_background",
    "childhood_environment",
    "family_crisis",
    "life_goals",
];

/// Who the character is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    /// Full name.
    pub name: String,
    /// Archetype.
    pub role: RoleKind,
    /// Sex, which fixes the pronouns.
    pub sex: Sex,
}

/// The `Family Background` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyBackground {
    /// Kind of family.
    pub family: String,
    /// A line about growing up in it.
    pub anecdote: String,
}

/// The twelve attributes every role rolls on the shared tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommonTraits {
    /// Personality.
    pub personality: String,
    /// Clothing style.
    pub clothing_style: String,
    /// Hairstyle.
    pub hairstyle: String,
    /// Affectation.
    pub affectation: String,
    /// What they value most.
    pub motivation: String,
    /// How they feel about people.
    pub relationships: String,
    /// Most valued person.
    pub most_valued_person: String,
    /// Most valued possession, with its leading article.
    pub most_valued_possession: String,
    /// Family type and anecdote.
    pub family_background: FamilyBackground,
    /// Where they grew up.
    pub childhood_environment: String,
    /// What went wrong at home.
    pub family_crisis: String,
    /// Life goals.
    pub life_goals: String,
}

impl CommonTraits {
    /// Roll every common attribute table once, in [`COMMON_ATTRIBUTES`] order.
    pub fn resolve(res: &mut Resolver<'_, '_>) -> GenResult<Self> {
        let personality = res.common_text("personality")?;
        let clothing_style = res.common_text("clothing_style")?;
        let hairstyle = res.common_text("hairstyle")?;
        let affectation = res.common_text("affectation")?;
        let motivation = res.common_text("motivation")?;
        let relationships = res.common_text("relationships")?;
        let most_valued_person = res.common_text("most_valued_person")?;
        let most_valued_possession = res.common_text("most_valued_possession")?;
        let (family, anecdote) = res.common("family_background")?.pair()?;
        let family_background = FamilyBackground {
            family: family.to_string(),
            anecdote: anecdote.to_string(),
        };
        let childhood_environment = res.common_text("childhood_environment")?;
        let family_crisis = res.common_text("family_crisis")?;
        let life_goals = res.common_text("life_goals")?;

        Ok(Self {
            personality,
            clothing_style,
            hairstyle,
            affectation,
            motivation,
            relationships,
            most_valued_person,
            most_valued_possession,
            family_background,
            childhood_environment,
            family_crisis,
            life_goals,
        })
    }
}

/// A fully resolved character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Character {
    identity: Identity,
    origin: CulturalOrigin,
    traits: CommonTraits,
    friends: Vec<Friend>,
    enemies: Vec<Enemy>,
    love_interests: Vec<LoveInterest>,
    profile: RoleProfile,
}

impl Character {
    /// Name, role and sex.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Character name.
    pub fn name(&self) -> &str {
        &self.identity.name
    }

    /// Archetype.
    pub fn role(&self) -> RoleKind {
        self.identity.role
    }

    /// Sex.
    pub fn sex(&self) -> Sex {
        self.identity.sex
    }

    /// Pronouns derived from the sex.
    pub fn pronouns(&self) -> Pronouns {
        self.identity.sex.pronouns()
    }

    /// Region and language.
    pub fn origin(&self) -> &CulturalOrigin {
        &self.origin
    }

    /// The twelve shared attributes.
    pub fn traits(&self) -> &CommonTraits {
        &self.traits
    }

    /// Friends, possibly none.
    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    /// Enemies, possibly none.
    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    /// Past loves, possibly none.
    pub fn love_interests(&self) -> &[LoveInterest] {
        &self.love_interests
    }

    /// Role-specific background.
    pub fn profile(&self) -> &RoleProfile {
        &self.profile
    }
}

/// Accumulates resolved fields during generation.
#[derive(Debug, Default)]
pub(crate) struct CharacterBuilder {
    identity: Option<Identity>,
    origin: Option<CulturalOrigin>,
    traits: Option<CommonTraits>,
    friends: Vec<Friend>,
    enemies: Vec<Enemy>,
    love_interests: Vec<LoveInterest>,
    profile: Option<RoleProfile>,
}

impl CharacterBuilder {
    pub(crate) fn new(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
            ..Self::default()
        }
    }

    pub(crate) fn origin(&mut self, origin: CulturalOrigin) -> &mut Self {
        self.origin = Some(origin);
        self
    }

    pub(crate) fn traits(&mut self, traits: CommonTraits) -> &mut Self {
        self.traits = Some(traits);
        self
    }

    pub(crate) fn relations(
        &mut self,
        friends: Vec<Friend>,
        enemies: Vec<Enemy>,
        love_interests: Vec<LoveInterest>,
    ) -> &mut Self {
        self.friends = friends;
        self.enemies = enemies;
        self.love_interests = love_interests;
        self
    }

    pub(crate) fn profile(&mut self, profile: RoleProfile) -> &mut Self {
        self.profile = Some(profile);
        self
    }

    /// Freeze into a [`Character`]; fails if a required field was never set.
    pub(crate) fn build(self) -> GenResult<Character> {
        let identity = self.identity.ok_or(GenError::Incomplete("identity"))?;
        let origin = self.origin.ok_or(GenError::Incomplete("cultural origin"))?;
        let traits = self.traits.ok_or(GenError::Incomplete("common traits"))?;
        let profile = self.profile.ok_or(GenError::Incomplete("role profile"))?;
        debug!(name = %identity.name, role = %identity.role, "character resolved");
        Ok(Character {
            identity,
            origin,
            traits,
            friends: self.friends,
            enemies: self.enemies,
            love_interests: self.love_interests,
            profile,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::common_table_name;
    use crate::testing::fixture_store;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn common_traits_come_from_their_tables() {
        let store = fixture_store();
        let mut rng = StdRng::seed_from_u64(5);
        let mut res = Resolver::new(&store, RoleKind::Solo, &mut rng);
        let traits = CommonTraits::resolve(&mut res).unwrap();
        assert!(traits.personality.contains("Personality"));
        assert!(traits.clothing_style.contains("Clothing Style"));
        assert!(traits.most_valued_possession.contains("Most Valued Possession"));
        assert!(traits.family_background.family.contains("family"));
        assert!(traits.life_goals.contains("Life Goals"));
    }

    #[test]
    fn every_attribute_has_a_table() {
        let store = fixture_store();
        for attribute in COMMON_ATTRIBUTES {
            assert!(store.table(&common_table_name(attribute)).is_ok(), "{attribute}");
        }
    }

    #[test]
    fn build_requires_every_part() {
        let builder = CharacterBuilder::new(Identity {
            name: "Test".into(),
            role: RoleKind::Fixer,
            sex: Sex::Male,
        });
        let err = builder.build().unwrap_err();
        assert!(matches!(err, GenError::Incomplete("cultural origin")));
    }
}
