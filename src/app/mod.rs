//! Application use cases.

mod post;
mod profile;
mod user;

pub use post::{post_create, post_list_by_author, PostCreateReq, PostDto};
pub use profile::{profile_get, profile_set, ProfileDto, ProfileSetReq};
pub use user::{
    user_create, user_get, user_list_with_relations, UserCreateReq, UserDetailDto, UserDto,
};
