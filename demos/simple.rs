use aig_rs::aig::AigManager;
use aig_rs::alloc::CountingAllocator;
use aig_rs::types::{Slice, Var};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let mut mgr = AigManager::with_allocator(CountingAllocator::new());
    println!("mgr = {:?}", mgr);

    let f = mgr.false_ref();
    let t = mgr.true_ref();
    println!("false = {}", f);
    println!("true = {}", t);

    let x1 = mgr.variable(Var::new(1), Slice::ZERO);
    println!("x1 = {}", x1);
    let x2 = mgr.variable(Var::new(2), Slice::ZERO);
    println!("x2 = {}", x2);
    let x1_next = mgr.variable(Var::new(1), Slice::ZERO.next());
    println!("x1' = {}", x1_next);

    let a = mgr.conjunction(x1, !x2);
    println!("x1 & ~x2 = {}", a);
    let b = mgr.conjunction(!x2, x1);
    println!("~x2 & x1 = {} (shared: {})", b, a == b);
    let o = mgr.disjunction(a, x1_next);
    println!("(x1 & ~x2) | x1' = {}", o);
    let c = mgr.conjunction(o, !o);
    println!("o & ~o = {}", c);

    println!("{}", mgr.to_dot(&[o])?);
    println!("mgr = {:?}", mgr);
    println!("allocator = {:?}", mgr.allocator());

    for r in [f, t, x1, x2, x1_next, a, b, o, c] {
        mgr.dec(r);
    }
    println!("after release: {} nodes", mgr.num_nodes());

    mgr.reset();
    println!("after reset: {:?}", mgr.allocator());

    Ok(())
}
