//! Profile domain model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::{Record, RecordFields, RecordStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
    Unspecified,
}

impl Gender {
    pub const ALL: [Gender; 4] = [Gender::Male, Gender::Female, Gender::Other, Gender::Unspecified];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "男性",
            Gender::Female => "女性",
            Gender::Other => "その他",
            Gender::Unspecified => "未設定",
        }
    }
}

/// Account status of a profile. `Deleted` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileStatus {
    Active,
    Suspended,
    Disabled,
    Deleted,
}

impl ProfileStatus {
    pub const ALL: [ProfileStatus; 4] = [
        ProfileStatus::Active,
        ProfileStatus::Suspended,
        ProfileStatus::Disabled,
        ProfileStatus::Deleted,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProfileStatus::Active => "アクティブ",
            ProfileStatus::Suspended => "一時停止",
            ProfileStatus::Disabled => "無効",
            ProfileStatus::Deleted => "削除済み",
        }
    }
}

/// Postal address.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub zip_code: String,
    pub prefecture: String,
    pub city: String,
    pub street: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
}

impl Address {
    /// Formats the address on one line: `〒{zip} {prefecture} {city} {street} {building}`,
    /// skipping empty parts.
    pub fn format(&self) -> String {
        let zip = if self.zip_code.is_empty() {
            String::new()
        } else {
            format!("〒{}", self.zip_code)
        };

        [
            zip.as_str(),
            self.prefecture.as_str(),
            self.city.as_str(),
            self.street.as_str(),
            self.building.as_deref().unwrap_or(""),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Editable fields of a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFormData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Gender,
    pub address: Address,
    pub occupation: String,
    pub bio: String,
    pub status: ProfileStatus,
}

impl ProfileFormData {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }
}

impl RecordFields for ProfileFormData {
    type Status = ProfileStatus;
    const ENTITY: &'static str = "profile";
    const DELETED: ProfileStatus = ProfileStatus::Deleted;

    fn status(&self) -> ProfileStatus {
        self.status
    }

    fn set_status(&mut self, status: ProfileStatus) {
        self.status = status;
    }
}

pub type Profile = Record<ProfileFormData>;
pub type ProfileStore = RecordStore<ProfileFormData>;

#[cfg(test)]
mod tests {
    use super::*;

    fn address(building: Option<&str>) -> Address {
        Address {
            zip_code: "150-0001".to_string(),
            prefecture: "東京都".to_string(),
            city: "渋谷区".to_string(),
            street: "1-2-3".to_string(),
            building: building.map(str::to_string),
        }
    }

    #[test]
    fn test_format_address_with_building() {
        assert_eq!(
            address(Some("サンハイツ3F")).format(),
            "〒150-0001 東京都 渋谷区 1-2-3 サンハイツ3F"
        );
    }

    #[test]
    fn test_format_address_skips_empty_parts() {
        let mut addr = address(None);
        addr.zip_code.clear();
        addr.city.clear();
        assert_eq!(addr.format(), "東京都 1-2-3");
    }

    #[test]
    fn test_soft_delete_keeps_profile_fields() {
        let mut store = ProfileStore::new();
        let created = store.create(
            ProfileFormData {
                first_name: "花子".to_string(),
                last_name: "佐藤".to_string(),
                email: "hanako@example.com".to_string(),
                phone: "090-1234-5678".to_string(),
                birth_date: NaiveDate::from_ymd_opt(1990, 4, 1),
                gender: Gender::Female,
                address: address(None),
                occupation: "エンジニア".to_string(),
                bio: String::new(),
                status: ProfileStatus::Active,
            },
            "システム管理者",
        );

        store.soft_delete(&created.id, "システム管理者");

        let deleted = store.find_by_id(&created.id).unwrap();
        assert_eq!(deleted.status(), ProfileStatus::Deleted);
        assert_eq!(deleted.fields.address, created.fields.address);
        assert_eq!(deleted.fields.full_name(), "佐藤 花子");
        assert_eq!(store.active_count(), 0);
    }
}
