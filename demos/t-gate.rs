use std::path::PathBuf;
use bloqs::{
    basic_gates::TGate,
    bloq::{ Bloq, LegMap },
    circuit::{ QubitManager, Quregs, SimpleQubitManager },
    drawing::save_graphviz,
    tensor::Network,
};

fn legs(inp: u32, out: u32) -> (LegMap<u32>, LegMap<u32>) {
    (
        [("q".to_string(), inp)].into_iter().collect(),
        [("q".to_string(), out)].into_iter().collect(),
    )
}

// Wire a T gate into its adjoint, contract the pair back down to the identity,
// lower both to circuit operations, and write the T† diagram next to the
// system temp files.
fn main() -> anyhow::Result<()> {
    let t = TGate::default();
    let tdg = t.adjoint();
    println!("{} then {}: cost {}", t, tdg, t.t_complexity() + tdg.t_complexity());

    let mut tn: Network<u32> = Network::new();
    let (in0, out0) = legs(0, 1);
    let (in1, out1) = legs(1, 2);
    t.add_my_tensors(&mut tn, "first", &in0, &out0)?;
    tdg.add_my_tensors(&mut tn, "second", &in1, &out1)?;
    println!("T† T =\n{}", tn.to_matrix(&[2], &[0])?);

    let mut qm = SimpleQubitManager::default();
    let quregs: Quregs<_> = [("q".to_string(), qm.qalloc(1))].into_iter().collect();
    let (op_t, quregs) = t.as_circuit_op(&mut qm, &quregs)?;
    let (op_tdg, _) = tdg.as_circuit_op(&mut qm, &quregs)?;
    println!("circuit: {}; {}", op_t, op_tdg);

    let path: PathBuf = std::env::temp_dir().join("t-gate.gv");
    save_graphviz(&tdg, &path)?;
    println!("wrote {}", path.display());

    Ok(())
}
