use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};
use gdrive::folder::create::CreateFolder;

use crate::error::Error;

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateFolderRequest {
    name: String,
    #[serde(default)]
    make_public: bool,
}

#[derive(serde::Serialize)]
pub(crate) struct CreateFolderResponse {
    message: &'static str,
    folder: gdrive::file::File,
}

async fn run(
    client: gdrive::Client,
    payload: CreateFolderRequest,
) -> Result<CreateFolderResponse, Error> {
    let folder = client
        .create_folder(CreateFolder::new(payload.name))
        .await?;
    let folder = if payload.make_public {
        client.grant_public_read(&folder.id).await?;
        // the creation response may carry a link predating the grant
        client.get_file_info(&folder.id).await?
    } else {
        folder
    };
    Ok(CreateFolderResponse {
        message: "フォルダ作成成功",
        folder,
    })
}

pub(crate) async fn create(
    Extension(client): Extension<gdrive::Client>,
    payload: Result<Json<CreateFolderRequest>, JsonRejection>,
) -> Result<Json<CreateFolderResponse>, Error> {
    let result = match payload {
        Ok(Json(payload)) => run(client, payload).await,
        Err(rejection) => Err(Error::BadRequest(rejection.body_text())),
    };
    result.map(Json).map_err(|err| err.log("フォルダ作成失敗"))
}
