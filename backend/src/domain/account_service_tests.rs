//! Tests for the account service.

use std::sync::Arc;

use rstest::rstest;

use super::*;
use crate::domain::ports::{
    MockPasswordHasher, MockSessionTokens, MockUserRepository, StoredCredentials,
};
use crate::domain::{ErrorCode, Role, SessionToken, SignupDraft, UserId};

fn user(role: Role) -> User {
    User {
        id: UserId::new(7),
        name: "Asha".to_owned(),
        email: "asha@example.com".to_owned(),
        role,
        avatar: None,
        phone: None,
        room_number: None,
        fees_paid: 0.0,
        gender: None,
        is_verified: false,
    }
}

fn stored(role: Role) -> StoredCredentials {
    StoredCredentials {
        user: user(role),
        password_hash: "digest".to_owned(),
    }
}

fn account() -> NewAccount {
    NewAccount::try_new(SignupDraft {
        name: "Asha".to_owned(),
        email: "asha@example.com".to_owned(),
        password: "pw".to_owned(),
        ..SignupDraft::default()
    })
    .expect("valid signup")
}

fn issuing_tokens() -> MockSessionTokens {
    let mut tokens = MockSessionTokens::new();
    tokens
        .expect_issue()
        .returning(|identity| Ok(SessionToken::new(format!("token-{}", identity.id), 3600)));
    tokens
}

fn service(
    users: MockUserRepository,
    hasher: MockPasswordHasher,
    tokens: MockSessionTokens,
) -> AccountService<MockUserRepository> {
    AccountService::new(Arc::new(users), Arc::new(hasher), Arc::new(tokens))
}

#[tokio::test]
async fn signup_hashes_password_and_issues_token() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_credentials_by_email()
        .return_once(|_| Ok(None));
    users
        .expect_create()
        .withf(|_, digest| digest == "hashed:pw")
        .times(1)
        .return_once(|_, _| Ok(user(Role::Student)));
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_hash()
        .returning(|password| Ok(format!("hashed:{password}")));

    let grant = service(users, hasher, issuing_tokens())
        .signup(account())
        .await
        .expect("signup succeeds");

    assert_eq!(grant.user.id, UserId::new(7));
    assert_eq!(grant.token.as_str(), "token-7");
}

#[tokio::test]
async fn signup_rejects_existing_email_without_hashing() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_credentials_by_email()
        .return_once(|_| Ok(Some(stored(Role::Student))));
    users.expect_create().times(0);
    let mut hasher = MockPasswordHasher::new();
    hasher.expect_hash().times(0);

    let err = service(users, hasher, MockSessionTokens::new())
        .signup(account())
        .await
        .expect_err("duplicate email");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.message(), "User already exists");
}

#[tokio::test]
async fn signup_maps_racing_duplicate_to_invalid_request() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_credentials_by_email()
        .return_once(|_| Ok(None));
    users
        .expect_create()
        .return_once(|_, _| Err(UserRepositoryError::duplicate_email("asha@example.com")));
    let mut hasher = MockPasswordHasher::new();
    hasher.expect_hash().returning(|_| Ok("digest".to_owned()));

    let err = service(users, hasher, MockSessionTokens::new())
        .signup(account())
        .await
        .expect_err("duplicate email");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[case::wrong_role(Some(Role::Warden), true)]
#[case::wrong_password(Some(Role::Student), false)]
#[case::unknown_email(None, true)]
#[tokio::test]
async fn login_failures_share_one_message(
    #[case] stored_role: Option<Role>,
    #[case] password_matches: bool,
) {
    let mut users = MockUserRepository::new();
    users
        .expect_find_credentials_by_email()
        .return_once(move |_| Ok(stored_role.map(stored)));
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_verify()
        .returning(move |_, _| Ok(password_matches));

    let credentials =
        LoginCredentials::try_from_parts("asha@example.com", "pw", Role::Student).expect("creds");
    let err = service(users, hasher, MockSessionTokens::new())
        .login(credentials)
        .await
        .expect_err("login fails");

    assert_eq!(err.code(), ErrorCode::Unauthorized);
    assert_eq!(err.message(), "Invalid credentials");
}

#[tokio::test]
async fn login_issues_token_for_matching_role() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_credentials_by_email()
        .return_once(|_| Ok(Some(stored(Role::Warden))));
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_verify()
        .withf(|password, digest| password == "pw" && digest == "digest")
        .return_once(|_, _| Ok(true));

    let credentials =
        LoginCredentials::try_from_parts("asha@example.com", "pw", Role::Warden).expect("creds");
    let grant = service(users, hasher, issuing_tokens())
        .login(credentials)
        .await
        .expect("login succeeds");

    assert_eq!(grant.user.role, Role::Warden);
}

#[tokio::test]
async fn connection_failures_become_internal_errors() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .return_once(|_| Err(UserRepositoryError::connection("pool exhausted")));

    let viewer = AuthenticatedUser::new(UserId::new(7), Role::Student, "Asha");
    let err = service(users, MockPasswordHasher::new(), MockSessionTokens::new())
        .profile(&viewer)
        .await
        .expect_err("repository failure");

    assert_eq!(err.code(), ErrorCode::InternalError);
}

#[tokio::test]
async fn avatar_update_rejects_blank_values() {
    let mut users = MockUserRepository::new();
    users.expect_update_avatar().times(0);

    let viewer = AuthenticatedUser::new(UserId::new(7), Role::Student, "Asha");
    let err = service(users, MockPasswordHasher::new(), MockSessionTokens::new())
        .update_avatar(&viewer, "  ".to_owned())
        .await
        .expect_err("blank avatar");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}

#[tokio::test]
async fn avatar_update_for_missing_user_is_not_found() {
    let mut users = MockUserRepository::new();
    users.expect_update_avatar().return_once(|_, _| Ok(false));

    let viewer = AuthenticatedUser::new(UserId::new(99), Role::Admin, "Ghost");
    let err = service(users, MockPasswordHasher::new(), MockSessionTokens::new())
        .update_avatar(&viewer, "https://img.example/a.png".to_owned())
        .await
        .expect_err("missing user");

    assert_eq!(err.code(), ErrorCode::NotFound);
}
