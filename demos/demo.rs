//! End-to-end demo of the question bank engine.
//!
//! Run with: `cargo run --example demo`
//! (set `RUST_LOG=debug` to watch the engine's tracing events)
//!
//! This example shows how `quiz_bank_engine` works end to end:
//!
//! 1. **Listing** — a seeded 19-question bank paged at the default size
//!    of 10, including the out-of-range page a client could ask for.
//! 2. **Filter and search** — category listing and case-insensitive
//!    substring search (search results are served unpaginated in full).
//! 3. **Quiz mode** — a seeded session drawing unseen questions one at a
//!    time until the scope is exhausted; the seen-set lives entirely with
//!    the caller.
//! 4. **JSON shaping** — a `Page` rendered the way an HTTP layer would
//!    send it.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use quiz_bank_engine::{
    paginate, pick_unseen, CategoryId, MemoryBank, NewQuestion, QuestionStore, QuizOutcome,
    QuizScope, QUESTIONS_PER_PAGE,
};

/// Seed the classic six-category trivia bank with 19 questions.
fn seed_bank() -> MemoryBank {
    let mut bank = MemoryBank::with_categories([
        (1, "Science"),
        (2, "Art"),
        (3, "Geography"),
        (4, "History"),
        (5, "Entertainment"),
        (6, "Sports"),
    ]);

    let rows: [(&str, &str, u32, u8); 19] = [
        ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
        ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
        ("Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
        ("Which Dutch graphic artist was initialed M.C.?", "Escher", 2, 1),
        ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
        ("How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
        ("Which museum in Spain features works by Picasso?", "The Reina Sofia", 2, 4),
        ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
        ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
        ("The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
        ("Whose autobiography is entitled I Know Why the Caged Bird Sings?", "Maya Angelou", 4, 2),
        ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
        ("Who invented peanut butter?", "George Washington Carver", 4, 2),
        ("What movie earned Tom Hanks his third straight Oscar nomination?", "Apollo 13", 5, 4),
        ("What actor did author Anne Rice denounce, then praise?", "Tom Cruise", 5, 4),
        ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4),
        ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 6, 3),
        ("How many World Series titles have the New York Yankees won?", "27", 6, 3),
        ("What was the title of the 1990 fantasy directed by Tim Burton?", "Edward Scissorhands", 5, 3),
    ];

    for (text, answer, category, difficulty) in rows {
        bank.insert_question(NewQuestion {
            text: text.into(),
            answer: answer.into(),
            category: CategoryId(category),
            difficulty,
        })
        .expect("seed data is valid");
    }
    bank
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut bank = seed_bank();

    // ── Listing with pagination ──────────────────────────────────────────
    println!();
    println!("══ Listing: 19 questions at page size {QUESTIONS_PER_PAGE} ══");
    println!();
    let all = bank.list_all_questions();
    for page_no in 1..=3 {
        match paginate(&all, page_no, QUESTIONS_PER_PAGE) {
            Ok(page) => {
                println!(
                    "  page {page_no}: {} of {} question(s)",
                    page.visible_count, page.total_count
                );
                for item in &page.items {
                    println!("    {item}");
                }
            }
            Err(err) => println!("  page {page_no}: {err}"),
        }
        println!();
    }

    // ── Category filter ──────────────────────────────────────────────────
    println!("══ Category filter ══");
    println!();
    for category in bank.list_categories() {
        let questions = bank
            .list_questions_by_category(category.id)
            .expect("listed categories exist");
        println!("  {} — {} question(s)", category.name, questions.len());
    }
    println!();

    // ── Search (unpaginated by design) ───────────────────────────────────
    println!("══ Search: 'world cup' ══");
    println!();
    let hits = bank.search_questions("world cup").expect("non-empty term");
    for hit in &hits {
        println!("  {hit}");
    }
    println!();

    // ── Quiz session over one category ───────────────────────────────────
    println!("══ Quiz: Sports, seeded rng, drawn to exhaustion ══");
    println!();
    let scope = bank
        .scope_questions(QuizScope::Category(CategoryId(6)))
        .expect("category exists");
    let mut seen = HashSet::new();
    let mut rng = StdRng::seed_from_u64(2024);
    loop {
        match pick_unseen(&scope, &seen, &mut rng) {
            QuizOutcome::Question(picked) => {
                println!("  Q: {}", picked.text);
                println!("     A: {}", picked.answer);
                seen.insert(picked.id);
            }
            QuizOutcome::Exhausted => {
                println!("  (scope exhausted after {} question(s))", seen.len());
                break;
            }
        }
    }
    println!();

    // ── Deletion is strict ───────────────────────────────────────────────
    println!("══ Deletion ══");
    println!();
    let victim = all[0].id;
    bank.delete_question(victim).expect("question exists");
    println!("  deleted {victim}; bank now holds {} question(s)", bank.len());
    if let Err(err) = bank.delete_question(victim) {
        println!("  deleting again: {err}");
    }
    println!();

    // ── JSON shaping preview for an HTTP layer ───────────────────────────
    println!("══ Page 2 as JSON ══");
    println!();
    let page = paginate(&bank.list_all_questions(), 2, QUESTIONS_PER_PAGE)
        .expect("18 questions still fill two pages");
    println!("{}", serde_json::to_string_pretty(&page).expect("page serializes"));
}
