use khana_client::HttpClient;
use shared::models::{UserCreate, UserQuery, UserRole, UserUpdate};

use crate::cli::UsersCommand;
use crate::core::AdminResult;
use crate::users::{UserService, render_user_table};

pub async fn run<C: HttpClient>(service: &UserService<'_, C>, cmd: UsersCommand) -> AdminResult<String> {
    match cmd {
        UsersCommand::List {
            page,
            limit,
            search,
        } => {
            let query = UserQuery {
                page,
                limit,
                search: search.unwrap_or_default(),
            };
            let page = service.list(&query).await?;
            Ok(render_user_table(&page))
        }
        UsersCommand::Get { id } => {
            let row = service.get(&id).await?;
            let u = row.user;
            Ok(format!(
                "{} <{}>\nID: {}\nRole: {}\nBranch: {}\nStatus: {}",
                u.name,
                u.email,
                u.id,
                u.role,
                u.branch,
                u.status.as_deref().unwrap_or("-")
            ))
        }
        UsersCommand::Create {
            name,
            email,
            password,
            role,
            user_branch,
        } => {
            let user = service
                .create(UserCreate {
                    name,
                    email,
                    password,
                    role: UserRole::parse(&role),
                    branch: user_branch.unwrap_or_default(),
                    status: None,
                })
                .await?;
            Ok(format!("Created user {} ({}) as {}", user.name, user.id, user.role))
        }
        UsersCommand::Update {
            id,
            name,
            email,
            password,
            role,
            status,
        } => {
            let update = UserUpdate {
                name,
                email,
                password,
                role: role.as_deref().map(UserRole::parse),
                status,
            };
            let user = service.update(&id, &update).await?;
            Ok(format!("Updated user {} ({})", user.name, user.id))
        }
        UsersCommand::Delete { id } => service.delete(&id).await,
    }
}
