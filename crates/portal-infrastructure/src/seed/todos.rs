use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use portal_core::record::Record;
use portal_core::todo::{Todo, TodoFormData, TodoStatus};

use super::{SEED_RECORD_COUNT, pick, random_id};

/// Names recorded as creator/updater of the seeded todos.
pub const SEED_TODO_ACTORS: [&str; 4] = ["山田太郎", "佐藤花子", "田中次郎", "鈴木一郎"];

const TOPICS: [&str; 15] = [
    "ユーザー認証機能の実装",
    "データベース設計の見直し",
    "APIエンドポイントの作成",
    "フロントエンド画面の修正",
    "テストケースの追加",
    "ドキュメントの更新",
    "パフォーマンス改善",
    "セキュリティ対策の実装",
    "バグ修正",
    "新機能の企画",
    "コードレビュー",
    "デプロイ作業",
    "ライブラリのアップデート",
    "UI/UXの改善",
    "監視システムの構築",
];

const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

/// Generates the 25 starting todos, `TODO 1` first.
///
/// Statuses are drawn from every variant, deleted included. About 70% carry
/// a due date within the next 30 days.
pub fn seed_todos<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Vec<Todo> {
    (1..=SEED_RECORD_COUNT)
        .map(|i| {
            let created_at = now - Duration::milliseconds(rng.gen_range(0..30 * DAY_MILLIS));
            let updated_at = created_at + Duration::milliseconds(rng.gen_range(0..7 * DAY_MILLIS));
            let due_date = rng
                .gen_bool(0.7)
                .then(|| (now + Duration::milliseconds(rng.gen_range(0..30 * DAY_MILLIS))).date_naive());

            Record {
                id: random_id(rng),
                fields: TodoFormData {
                    title: format!("TODO {}: {}", i, TOPICS[i % TOPICS.len()]),
                    content: format!(
                        "これは{}番目のTODOの詳細内容です。\n実装やテスト、ドキュメント作成などの作業が含まれます。",
                        i
                    ),
                    due_date,
                    status: *pick(rng, &TodoStatus::ALL),
                },
                created_at,
                created_by: pick(rng, &SEED_TODO_ACTORS).to_string(),
                updated_at,
                updated_by: pick(rng, &SEED_TODO_ACTORS).to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_seed_shape() {
        let now = Utc::now();
        let todos = seed_todos(&mut StdRng::seed_from_u64(7), now);

        assert_eq!(todos.len(), SEED_RECORD_COUNT);
        assert_eq!(todos[0].fields.title, "TODO 1: データベース設計の見直し");
        assert_eq!(todos[14].fields.title, "TODO 15: ユーザー認証機能の実装");

        let ids: HashSet<_> = todos.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), SEED_RECORD_COUNT);

        for todo in &todos {
            assert!(todo.created_at <= now);
            assert!(todo.created_at > now - Duration::days(30));
            assert!(todo.updated_at >= todo.created_at);
            assert!(SEED_TODO_ACTORS.contains(&todo.created_by.as_str()));
            if let Some(due) = todo.fields.due_date {
                assert!(due >= now.date_naive());
            }
        }
    }

    #[test]
    fn test_same_seed_same_todos() {
        let now = Utc::now();
        let first = seed_todos(&mut StdRng::seed_from_u64(42), now);
        let second = seed_todos(&mut StdRng::seed_from_u64(42), now);
        assert_eq!(first, second);
    }
}
