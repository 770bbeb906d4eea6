// SPDX-FileCopyrightText: 2026 extmodel contributors
// SPDX-License-Identifier: MIT

use extmodel_derive::ExtModel;

#[derive(ExtModel)]
pub struct Tag {
    pub id: i64,
    pub label: String,
}

fn main() {
    assert_eq!(Tag::model_name(), "Tag");

    let generated = Tag::model_config().assemble();
    assert!(generated.is_clean());
    assert_eq!(generated.document["idProperty"], "id");
}
