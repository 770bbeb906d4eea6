// SPDX-FileCopyrightText: 2026 extmodel contributors
// SPDX-License-Identifier: MIT

use extmodel_derive::ExtModel;

#[derive(ExtModel)]
#[model_validation(generic, field = "login", type = "uniqueUsername")]
pub struct User {
    pub id: i64,

    #[model_validation(presence)]
    #[model_validation(length, min = "3", max = "32")]
    pub login: String,

    #[model_validation(email)]
    pub contact: String,

    #[model_validation(range, min = "0", max = "130")]
    pub age: u8,
}

fn main() {
    let generated = User::model_config().assemble();
    assert!(generated.is_clean());

    let validations = generated.document["validations"].as_array().unwrap();
    assert_eq!(validations.len(), 5);
    assert_eq!(validations[0]["type"], "presence");
    assert_eq!(validations[1]["min"], "3");
    assert_eq!(validations[4]["type"], "uniqueUsername");
}
