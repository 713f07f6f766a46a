use ecdsa::{PrivateKey, PublicKey, Signature, message_digest};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = PrivateKey::random(&mut rng).expect("keygen");
    let pk = PublicKey::from(&sk);
    println!("secret: {}", sk.to_hex());
    println!("public: {}", pk.point());

    let sk_bytes = bincode::serialize(&sk).expect("serialize sk");
    let pk_bytes = bincode::serialize(&pk).expect("serialize pk");

    let z = message_digest(b"hello ecdsa");
    let sig = sk.sign(&z).expect("sign");
    println!("{sig}");

    let sig_bytes = bincode::serialize(&sig).expect("serialize sig");
    let compact = sig.to_bytes();

    let sk2: PrivateKey = bincode::deserialize(&sk_bytes).expect("deserialize sk");
    let pk2: PublicKey = bincode::deserialize(&pk_bytes).expect("deserialize pk");
    let sig2: Signature = bincode::deserialize(&sig_bytes).expect("deserialize sig");

    assert!(pk2.verify(&z, &sig2));
    assert_eq!(Signature::from_bytes(&compact).expect("decode sig"), sig2);
    assert_eq!(sk2.sign(&z).expect("sign"), sig);
}
