//! User entity <-> model mapper

use debate_core::entities::User;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            name: model.name,
            nation: model.nation,
            language: model.language,
            role: model.role,
            address: model.address,
        }
    }
}
