use rust_sss::{distribute_secret, BigInt, RawShare, ShareSet};

fn main() {
    let secret: BigInt = "79836264049851234567890123456789012345678"
        .parse()
        .unwrap();

    // distribute process, 3 of 5, each share in a different radix
    let shares = distribute_secret(&secret, 3, 5).unwrap();
    let bases = [2, 8, 10, 16, 36];
    let raw_shares: Vec<RawShare> = shares
        .iter()
        .zip(bases.iter())
        .map(|(share, &base)| share.encode(base).unwrap())
        .collect();

    let set = ShareSet::new(5, 3, raw_shares).unwrap();
    let json = set.to_json().unwrap();

    println!("Share set:\n{}", json);

    // reconstruct process, only the first 3 shares are used
    let reconstructed = ShareSet::from_json(&json).unwrap().reconstruct().unwrap();

    assert_eq!(reconstructed, secret);

    println!("Secret:        {}", secret);
    println!("Reconstructed: {}", reconstructed);
}
