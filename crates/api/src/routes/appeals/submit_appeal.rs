use amoret_database::{AdminUser, Appeal, Database};
use amoret_models::v0::{DataSubmitAppeal, SanctionType};
use amoret_result::Result;
use rocket::serde::json::Json;
use rocket::State;
use schemars::JsonSchema;
use serde::Deserialize;

/// # Appeal Data
#[derive(Deserialize, JsonSchema)]
pub struct DataCreateAppeal {
    /// Id of the sanctioned user, supplied by the app backend
    user_id: String,
    /// Sanction being contested
    sanction: SanctionType,
    /// The user's case, in their own words
    appeal_message: String,
}

/// # Submit Appeal
///
/// Submit an appeal against a ban or suspension on behalf of the
/// sanctioned user. One pending appeal per user and sanction type.
#[openapi(tag = "Appeals")]
#[post("/", data = "<data>")]
pub async fn submit_appeal(
    db: &State<Database>,
    _moderator: AdminUser,
    data: Json<DataCreateAppeal>,
) -> Result<Json<Appeal>> {
    let data = data.into_inner();

    let appeal = Appeal::create(
        db,
        &data.user_id,
        DataSubmitAppeal {
            sanction: data.sanction,
            appeal_message: data.appeal_message,
        },
    )
    .await?;

    Ok(Json(appeal))
}
