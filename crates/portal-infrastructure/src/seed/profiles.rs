use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::Rng;

use portal_core::profile::{Address, Gender, Profile, ProfileFormData, ProfileStatus};
use portal_core::record::Record;

use super::{SEED_RECORD_COUNT, pick, random_id};

/// Actor recorded on every seeded profile.
pub const SEED_PROFILE_ACTOR: &str = "システム管理者";

const PREFECTURES: [&str; 10] = [
    "東京都", "大阪府", "愛知県", "神奈川県", "埼玉県", "千葉県", "兵庫県", "北海道", "福岡県", "静岡県",
];

const OCCUPATIONS: [&str; 10] = [
    "エンジニア", "デザイナー", "営業", "マーケター", "コンサルタント", "教師", "医師", "弁護士", "公務員",
    "学生",
];

const FIRST_NAMES: [&str; 25] = [
    "太郎", "次郎", "三郎", "花子", "美咲", "由美", "健太", "翔太", "美穂", "真理", "和也", "雄介", "恵美",
    "智子", "裕子", "直樹", "康介", "麻美", "香織", "明美", "俊介", "大輔", "洋子", "久美子", "典子",
];

const LAST_NAMES: [&str; 25] = [
    "田中", "佐藤", "鈴木", "高橋", "渡辺", "伊藤", "山本", "中村", "小林", "加藤", "吉田", "山田", "佐々木",
    "山口", "松本", "井上", "木村", "林", "清水", "森", "池田", "橋本", "山崎", "石川", "斎藤",
];

const BUILDINGS: [&str; 10] = [
    "サンハイツ",
    "グランメゾン",
    "パークマンション",
    "シティハウス",
    "ロイヤル",
    "エクセル",
    "プライム",
    "ガーデン",
    "ヒルズ",
    "タワー",
];

const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

/// Generates the 25 starting profiles.
///
/// Names cycle through fixed lists by index. About 90% have a birth date
/// and 40% a building name in the address.
pub fn seed_profiles<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Vec<Profile> {
    (1..=SEED_RECORD_COUNT)
        .map(|i| {
            let created_at = now - Duration::milliseconds(rng.gen_range(0..365 * DAY_MILLIS));
            let updated_at = created_at + Duration::milliseconds(rng.gen_range(0..30 * DAY_MILLIS));

            let first_name = FIRST_NAMES[i % FIRST_NAMES.len()];
            let last_name = LAST_NAMES[i % LAST_NAMES.len()];
            let prefecture = *pick(rng, &PREFECTURES);
            let occupation = *pick(rng, &OCCUPATIONS);

            let birth_date = if rng.gen_bool(0.9) {
                NaiveDate::from_ymd_opt(
                    rng.gen_range(1970..2010),
                    rng.gen_range(1..=12),
                    rng.gen_range(1..=28),
                )
            } else {
                None
            };

            let address = Address {
                zip_code: format!("{}-{}", rng.gen_range(100..1000), rng.gen_range(1000..10000)),
                prefecture: prefecture.to_string(),
                city: format!("{}市", prefecture.trim_end_matches(['都', '府', '県'])),
                street: format!(
                    "{}-{}-{}",
                    rng.gen_range(1..10),
                    rng.gen_range(1..=20),
                    rng.gen_range(1..=20)
                ),
                building: rng
                    .gen_bool(0.4)
                    .then(|| format!("{}{}F", BUILDINGS[i % BUILDINGS.len()], rng.gen_range(1..=10))),
            };

            Record {
                id: random_id(rng),
                fields: ProfileFormData {
                    first_name: first_name.to_string(),
                    last_name: last_name.to_string(),
                    email: format!(
                        "{}.{}{}@example.com",
                        first_name.to_lowercase(),
                        last_name.to_lowercase(),
                        i
                    ),
                    phone: format!(
                        "0{}0-{}-{}",
                        rng.gen_range(1..10),
                        rng.gen_range(1000..10000),
                        rng.gen_range(1000..10000)
                    ),
                    birth_date,
                    gender: *pick(rng, &Gender::ALL),
                    address,
                    occupation: occupation.to_string(),
                    bio: format!(
                        "こんにちは、{} {}です。{}として働いています。よろしくお願いします。",
                        first_name, last_name, occupation
                    ),
                    status: *pick(rng, &ProfileStatus::ALL),
                },
                created_at,
                created_by: SEED_PROFILE_ACTOR.to_string(),
                updated_at,
                updated_by: SEED_PROFILE_ACTOR.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_seed_shape() {
        let now = Utc::now();
        let profiles = seed_profiles(&mut StdRng::seed_from_u64(7), now);

        assert_eq!(profiles.len(), SEED_RECORD_COUNT);
        assert_eq!(profiles[0].fields.first_name, "次郎");
        assert_eq!(profiles[0].fields.last_name, "佐藤");
        assert_eq!(profiles[0].fields.email, "次郎.佐藤1@example.com");

        for profile in &profiles {
            let fields = &profile.fields;
            assert_eq!(profile.created_by, SEED_PROFILE_ACTOR);
            assert!(profile.updated_at >= profile.created_at);
            assert!(PREFECTURES.contains(&fields.address.prefecture.as_str()));
            assert!(fields.address.city.ends_with('市'));
            assert!(!fields.address.city.contains('県'));
            assert!(fields.address.format().starts_with('〒'));
            assert!(fields.bio.contains(&fields.occupation));
        }
    }

    #[test]
    fn test_same_seed_same_profiles() {
        let now = Utc::now();
        let first = seed_profiles(&mut StdRng::seed_from_u64(3), now);
        let second = seed_profiles(&mut StdRng::seed_from_u64(3), now);
        assert_eq!(first, second);
    }
}
