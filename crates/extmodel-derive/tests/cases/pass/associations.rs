// SPDX-FileCopyrightText: 2026 extmodel contributors
// SPDX-License-Identifier: MIT

use extmodel_derive::ExtModel;

#[derive(ExtModel)]
#[model(name = "MyApp.model.Author")]
pub struct Author {
    pub id: i64,
    pub name: String,
}

#[derive(ExtModel)]
#[model(has_many(Chapter))]
pub struct Book {
    pub id: i64,

    #[model_association(belongs_to, model = Author)]
    pub author_id: i64,

    #[model_association(has_many, model = "MyApp.model.Review", auto_load)]
    pub reviews: Vec<String>,
}

#[derive(ExtModel)]
pub struct Chapter {
    pub id: i64,
}

fn main() {
    let generated = Book::model_config().assemble();
    assert!(generated.is_clean());

    let doc = &generated.document;
    // The path target picked up Author's renamed model.
    assert_eq!(doc["associations"][0]["model"], "MyApp.model.Author");
    assert_eq!(doc["associations"][1]["model"], "MyApp.model.Review");
    assert_eq!(doc["hasMany"][0], "Chapter");
    // Association members are not data fields.
    assert_eq!(doc["fields"].as_array().map(Vec::len), Some(1));
}
