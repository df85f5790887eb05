use shared::UserResponse;

use crate::domain::models::UserRecord;

pub struct UserMapper;

impl UserMapper {
    pub fn to_dto(domain: UserRecord) -> UserResponse {
        UserResponse {
            uid: domain.uid,
            email: domain.email,
            display_name: domain.display_name,
            disabled: domain.disabled,
        }
    }

    pub fn to_dto_list(users: Vec<UserRecord>) -> Vec<UserResponse> {
        users.into_iter().map(Self::to_dto).collect()
    }
}
