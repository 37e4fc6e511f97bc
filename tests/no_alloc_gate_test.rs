use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use just_divide::core::{hint_mask, is_terminal, resolve, Board, GameSession, GameSnapshot, SessionConfig};
use just_divide::engine::Message;
use just_divide::term::{FrameBuffer, GameView, Hud, Viewport};
use just_divide::types::{GameAction, Pos};

/// Counts allocator calls while armed; otherwise a plain pass-through.
struct TallyAlloc;

static ARMED: AtomicBool = AtomicBool::new(false);
static ALLOCS: AtomicUsize = AtomicUsize::new(0);
static REALLOCS: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: TallyAlloc = TallyAlloc;

unsafe impl GlobalAlloc for TallyAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if ARMED.load(Ordering::Relaxed) {
            ALLOCS.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if ARMED.load(Ordering::Relaxed) {
            REALLOCS.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

/// `(allocs, reallocs)` made while running `f`.
fn tally<F: FnOnce()>(f: F) -> (usize, usize) {
    ALLOCS.store(0, Ordering::Relaxed);
    REALLOCS.store(0, Ordering::Relaxed);
    ARMED.store(true, Ordering::Relaxed);
    f();
    ARMED.store(false, Ordering::Relaxed);
    (ALLOCS.load(Ordering::Relaxed), REALLOCS.load(Ordering::Relaxed))
}

// Single test in this binary: the counter is process-wide.
#[test]
fn read_paths_do_not_allocate() {
    // Everything that may allocate once happens before arming.
    let mut session = GameSession::new(SessionConfig::default());
    session.apply_action(GameAction::Place { row: 1, col: 1 }).unwrap();
    session.apply_action(GameAction::ToggleHints).unwrap();

    let mut chain = Board::new();
    chain.set(Pos::new(1, 1), Some(12));
    chain.set(Pos::new(1, 2), Some(3));
    chain.set(Pos::new(1, 0), Some(4));

    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(80, 24);
    let mut snap = GameSnapshot::default();
    let message = Message::info("Place the top tile on the grid to start!");

    let counts = tally(|| {
        for _ in 0..50 {
            session.snapshot_into(&mut snap);
            let hud = Hud {
                cursor: Some(Pos::new(2, 2)),
                message: Some(&message),
            };
            view.render_into(&snap, hud, viewport, &mut fb);

            let mut board = chain;
            let outcome = resolve(&mut board, Pos::new(1, 0));
            assert_eq!(outcome.steps.len(), 2);

            assert!(!is_terminal(&board));
            let _ = hint_mask(&board, 6);
            let _ = session.tick();
        }
    });

    assert_eq!(counts, (0, 0));
}
