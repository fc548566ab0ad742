//! Character generation: role selection and the single resolution pass.

use lp_tables::TableStore;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::character::{Character, CharacterBuilder, CommonTraits, Identity};
use crate::config::CharacterRequest;
use crate::error::{GenError, GenResult};
use crate::names::NameService;
use crate::origin::CulturalOrigin;
use crate::pronoun::Sex;
use crate::relations::{Enemy, Friend, LoveInterest, roll_list};
use crate::resolver::Resolver;
use crate::roles::RoleKind;

/// Generates characters from one table store and name service.
pub struct Generator<'a> {
    tables: &'a TableStore,
    names: &'a dyn NameService,
}

impl<'a> Generator<'a> {
    /// Create a generator over loaded tables.
    pub fn new(tables: &'a TableStore, names: &'a dyn NameService) -> Self {
        Self { tables, names }
    }

    /// Decide the role for a request.
    ///
    /// A requested role must appear in the configured `roles` list; this
    /// check happens before anything is rolled. Without a request, a role
    /// is picked uniformly among the configured roles that have a
    /// generator.
    pub fn select_role(&self, requested: Option<&str>, rng: &mut StdRng) -> GenResult<RoleKind> {
        if let Some(requested) = requested {
            let configured = self.tables.find_role(requested).ok_or_else(|| {
                GenError::UnknownRole {
                    requested: requested.to_string(),
                    valid: self.tables.roles().to_vec(),
                }
            })?;
            return RoleKind::parse(configured)
                .ok_or_else(|| GenError::UnsupportedRole(configured.to_string()));
        }

        let usable: Vec<RoleKind> = self
            .tables
            .roles()
            .iter()
            .filter_map(|r| RoleKind::parse(r))
            .collect();
        lp_dice::pick(&usable, rng).copied().ok_or(GenError::NoRoles)
    }

    /// Generate one character.
    ///
    /// Resolution order is fixed: role, sex, name, cultural origin, the
    /// common attributes, friends, enemies, love affairs, and finally the
    /// role profile. Any table error aborts the whole character.
    pub fn generate(&self, request: &CharacterRequest, rng: &mut StdRng) -> GenResult<Character> {
        let role = self.select_role(request.role.as_deref(), rng)?;
        let sex = request.sex.unwrap_or_else(|| Sex::random(rng));
        let name = request
            .name
            .clone()
            .unwrap_or_else(|| self.names.name(sex, rng));
        info!(%role, %sex, %name, "generating character");

        let mut res = Resolver::new(self.tables, role, rng);
        let mut builder = CharacterBuilder::new(Identity { name, role, sex });

        builder.origin(CulturalOrigin::resolve(&mut res)?);
        builder.traits(CommonTraits::resolve(&mut res)?);

        let friends = roll_list(&mut res, self.names, "friends", Friend::generate)?;
        let enemies = roll_list(&mut res, self.names, "enemies", Enemy::generate)?;
        let love = roll_list(&mut res, self.names, "love", LoveInterest::generate)?;
        builder.relations(friends, enemies, love);

        let profile = (role.generator())(&mut res)?;
        debug!(character_type = profile.character_type(), "role profile resolved");
        builder.profile(profile);

        builder.build()
    }
}
