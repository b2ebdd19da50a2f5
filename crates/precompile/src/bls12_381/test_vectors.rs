//! Known answers in ABI encoding.
use crate::bls12_381_const::{PADDED_G1_LENGTH, PADDED_G2_LENGTH, SCALAR_LENGTH};
use primitives::hex;

/// G1 generator.
pub(crate) const G1: [u8; PADDED_G1_LENGTH] = hex!("0000000000000000000000000000000017f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb0000000000000000000000000000000008b3f481e3aaa0f1a09e30ed741d8ae4fcf5e095d5d00af600db18cb2c04b3edd03cc744a2888ae40caa232946c5e7e1");
/// `[2]G1`.
pub(crate) const G1_DOUBLE: [u8; PADDED_G1_LENGTH] = hex!("000000000000000000000000000000000572cbea904d67468808c8eb50a9450c9721db309128012543902d0ac358a62ae28f75bb8f1c7c42c39a8c5529bf0f4e00000000000000000000000000000000166a9d8cabc673a322fda673779d8e3822ba3ecb8670e461f73bb9021d5fd76a4c56d9d4cd16bd1bba86881979749d28");
/// `[3]G1`.
pub(crate) const G1_TRIPLE: [u8; PADDED_G1_LENGTH] = hex!("0000000000000000000000000000000009ece308f9d1f0131765212deca99697b112d61f9be9a5f1f3780a51335b3ff981747a0b2ca2179b96d2c0c9024e522400000000000000000000000000000000032b80d3a6f5b09f8a84623389c5f80ca69a0cddabc3097f9d9c27310fd43be6e745256c634af45ca3473b0590ae30d1");
/// `-G1`.
pub(crate) const G1_NEG: [u8; PADDED_G1_LENGTH] = hex!("0000000000000000000000000000000017f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb00000000000000000000000000000000114d1d6855d545a8aa7d76c8cf2e21f267816aef1db507c96655b9d5caac42364e6f38ba0ecb751bad54dcd6b939c2ca");
/// On the G1 curve with `x = 4`, outside the prime order subgroup.
pub(crate) const G1_NOT_IN_SUBGROUP: [u8; PADDED_G1_LENGTH] = hex!("00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000004000000000000000000000000000000000a989badd40d6212b33cffc3f3763e9bc760f988c9926b26da9dd85e928483446346b8ed00e1de5d5ea93e354abe706c");
/// G2 generator.
pub(crate) const G2: [u8; PADDED_G2_LENGTH] = hex!("00000000000000000000000000000000024aa2b2f08f0a91260805272dc51051c6e47ad4fa403b02b4510b647ae3d1770bac0326a805bbefd48056c8c121bdb80000000000000000000000000000000013e02b6052719f607dacd3a088274f65596bd0d09920b61ab5da61bbdc7f5049334cf11213945d57e5ac7d055d042b7e000000000000000000000000000000000ce5d527727d6e118cc9cdc6da2e351aadfd9baa8cbdd3a76d429a695160d12c923ac9cc3baca289e193548608b82801000000000000000000000000000000000606c4a02ea734cc32acd2b02bc28b99cb3e287e85a763af267492ab572e99ab3f370d275cec1da1aaa9075ff05f79be");
/// `[2]G2`.
pub(crate) const G2_DOUBLE: [u8; PADDED_G2_LENGTH] = hex!("000000000000000000000000000000001638533957d540a9d2370f17cc7ed5863bc0b995b8825e0ee1ea1e1e4d00dbae81f14b0bf3611b78c952aacab827a053000000000000000000000000000000000a4edef9c1ed7f729f520e47730a124fd70662a904ba1074728114d1031e1572c6c886f6b57ec72a6178288c47c33577000000000000000000000000000000000468fb440d82b0630aeb8dca2b5256789a66da69bf91009cbfe6bd221e47aa8ae88dece9764bf3bd999d95d71e4c9899000000000000000000000000000000000f6d4552fa65dd2638b361543f887136a43253d9c66c411697003f7a13c308f5422e1aa0a59c8967acdefd8b6e36ccf3");
/// `[3]G2`.
pub(crate) const G2_TRIPLE: [u8; PADDED_G2_LENGTH] = hex!("00000000000000000000000000000000122915c824a0857e2ee414a3dccb23ae691ae54329781315a0c75df1c04d6d7a50a030fc866f09d516020ef82324afae0000000000000000000000000000000009380275bbc8e5dcea7dc4dd7e0550ff2ac480905396eda55062650f8d251c96eb480673937cc6d9d6a44aaa56ca66dc000000000000000000000000000000000b21da7955969e61010c7a1abc1a6f0136961d1e3b20b1a7326ac738fef5c721479dfd948b52fdf2455e44813ecfd8920000000000000000000000000000000008f239ba329b3967fe48d718a36cfe5f62a7e42e0bf1c1ed714150a166bfbd6bcf6b3b58b975b9edea56d53f23a0e849");
/// `-G2`.
pub(crate) const G2_NEG: [u8; PADDED_G2_LENGTH] = hex!("00000000000000000000000000000000024aa2b2f08f0a91260805272dc51051c6e47ad4fa403b02b4510b647ae3d1770bac0326a805bbefd48056c8c121bdb80000000000000000000000000000000013e02b6052719f607dacd3a088274f65596bd0d09920b61ab5da61bbdc7f5049334cf11213945d57e5ac7d055d042b7e000000000000000000000000000000000d1b3cc2c7027888be51d9ef691d77bcb679afda66c73f17f9ee3837a55024f78c71363275a75d75d86bab79f74782aa0000000000000000000000000000000013fa4d4a0ad8b1ce186ed5061789213d993923066dddaf1040bc3ff59f825c78df74f2d75467e25e0f55f8a00fa030ed");
/// On the G2 curve with `x = 1 + u`, outside the prime order subgroup.
pub(crate) const G2_NOT_IN_SUBGROUP: [u8; PADDED_G2_LENGTH] = hex!("00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000001000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000010000000000000000000000000000000002066bca274eb64b2410222895b74acec54cf001baf6c7aeeff616820743dce87eddb1700e7a2d717dc4cea5582195e1000000000000000000000000000000001934ffa59d993a4bcbe529440126a8af9f7bff4bc127e15ab9f75688bf07e7157d06cb8933608b225495cba14be0d33d");
/// Scalar above 2^96 and below the subgroup order.
pub(crate) const K: [u8; SCALAR_LENGTH] = hex!("000000000000000000000000000000000000000123456789abcdef0123456789");
/// `[K]G1_NOT_IN_SUBGROUP`.
pub(crate) const G1_NOT_IN_SUBGROUP_TIMES_K: [u8; PADDED_G1_LENGTH] = hex!("0000000000000000000000000000000010a3f6b7141f5ad7cc19d186762b6dc8d1ae2fa05da9af4789764c4d5abc5fecd759e91f16bd9d770c459b6407f51b440000000000000000000000000000000016eb3ab993ede05a927e9eb25ae2b5e48fe429dd92bf5d10e203359c955286816cc00df2492f679d90c1ebe2ea053a72");
/// `[K + 3]G1_NOT_IN_SUBGROUP`.
pub(crate) const G1_NOT_IN_SUBGROUP_TIMES_K_PLUS_3: [u8; PADDED_G1_LENGTH] = hex!("0000000000000000000000000000000016b8707e91e9b79bd7c30320ca0ec3d0a3efaf1fc4287a2c0080429a31fd17a7852915969c788f3beb47f80b89cf4343000000000000000000000000000000000ec461634198df922a614d085dec23b9e802a1e493389edda516425015888a3958f38ed73627d4d44bdf03b27837938c");
/// `[K]G2_NOT_IN_SUBGROUP`.
pub(crate) const G2_NOT_IN_SUBGROUP_TIMES_K: [u8; PADDED_G2_LENGTH] = hex!("000000000000000000000000000000000d7ff23078b6426f53ea7f4394b4e07345f63143ad5776fbcdb23cb4bf4ca58928d62a03b8ae5f6e2414850cb4a59694000000000000000000000000000000001195a1b3258d4f2b2fb852f056707463092fdfc6acb78ffee1fffbc5974a60d0c246d662b5466cb20ba27f175e4b40b90000000000000000000000000000000011b04a236a8f7425bbbe9cbaa7a958ac9561e2e690a07081e74d680be1d6fdaf722a938ba2debc96763a01d90529d678000000000000000000000000000000001196df7c621f1d443df16222913370d381aef229349a7f492641c39cc89a6e1fa8eac76127d95a010c38824148ad4ada");
/// Subgroup order plus one.
pub(crate) const R_PLUS_ONE: [u8; SCALAR_LENGTH] = hex!("73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000002");

/// Big-endian scalar holding `n`.
pub(crate) fn scalar(n: u8) -> [u8; SCALAR_LENGTH] {
    let mut s = [0u8; SCALAR_LENGTH];
    s[SCALAR_LENGTH - 1] = n;
    s
}

/// Concatenates input pieces.
pub(crate) fn input(parts: &[&[u8]]) -> Vec<u8> {
    parts.concat()
}
