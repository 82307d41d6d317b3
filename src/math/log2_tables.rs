/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */

/// `(r, log2(r) hi, log2(r) lo)` for the first reduction step, `f` in [0.75, 1.5)
pub(crate) static LOG2_R1: [(u64, u64, u64); 64] = [
    (0x3ff5390948f40fea, 0xbfda152f142a0000, 0x3d7f93e27b43bd2c),
    (0x3ff5015015015015, 0xbfd9218009250000, 0x3d6162432a1b8df7),
    (0x3ff4cab88725af6e, 0xbfd8304d90c18000, 0x3d780bb749056fe7),
    (0x3ff49539e3b2d066, 0xbfd7418acebc0000, 0x3d4ceac7f0607711),
    (0x3ff460cbc7f5cf9a, 0xbfd6552b49988000, 0x3d5d8913d0e89fa0),
    (0x3ff42d6625d51f86, 0xbfd56b22e6b58000, 0x3d3c7eaf515033a1),
    (0x3ff3fb013fb013fb, 0xbfd48365e6960000, 0x3d6434adcde7edc7),
    (0x3ff3c995a47babe7, 0xbfd39de8e1560000, 0x3d78246f8e527754),
    (0x3ff3991c2c187f63, 0xbfd2baa0c34c0000, 0x3d5e1513c28e180d),
    (0x3ff3698df3de0747, 0xbfd1d982c9d58000, 0x3d763ea3fed4b8a2),
    (0x3ff33ae45b57bcb1, 0xbfd0fa8480450000, 0x3d732ccbacf1779b),
    (0x3ff30d190130d190, 0xbfd01d9bbcfa8000, 0x3d5e2bfeb2b884aa),
    (0x3ff2e025c04b8097, 0xbfce857d3d370000, 0x3d7d9309b4d2ea85),
    (0x3ff2b404ad012b40, 0xbfccd3c712d40000, 0x3d7ddf360962d7ab),
    (0x3ff288b01288b012, 0xbfcb2602497e0000, 0x3d7597f8a121640f),
    (0x3ff25e22708092f1, 0xbfc97c1cb13d0000, 0x3d702807d15580dc),
    (0x3ff23456789abcdf, 0xbfc7d60496d00000, 0x3d612ce913d7a827),
    (0x3ff20b470c67c0d8, 0xbfc633a8bf440000, 0x3d70648bca9c96bd),
    (0x3ff1e2ef3b3fb874, 0xbfc494f863b90000, 0x3d5066fceb89b0eb),
    (0x3ff1bb4a4046ed29, 0xbfc2f9e32d5c0000, 0x3d117b8b6c4f846b),
    (0x3ff19453808ca29c, 0xbfc1625931870000, 0x3d52c83506452154),
    (0x3ff16e0689427378, 0xbfbf9c95dc1e0000, 0x3d6dd5d2183150f3),
    (0x3ff1485f0e0acd3b, 0xbfbc7b528b720000, 0x3d70e43c4f4e619d),
    (0x3ff12358e75d3033, 0xbfb960caf9ac0000, 0x3d520fbfd5902a1e),
    (0x3ff0fef010fef010, 0xbfb64ce26c080000, 0x3d78ebeefb4ac467),
    (0x3ff0db20a88f4695, 0xbfb33f7cde160000, 0x3d730b3312da7a7d),
    (0x3ff0b7e6ec259dc7, 0xbfb0387efbcc0000, 0x3d7796f1632949c3),
    (0x3ff0953f39010953, 0xbfaa6f9c37800000, 0x3d71687e151172cc),
    (0x3ff073260a47f7c6, 0xbfa47aa073580000, 0x3d51f87e4a9cc778),
    (0x3ff05197f7d73404, 0xbf9d23afc4980000, 0x3d7b183a6b628487),
    (0x3ff03091b51f5e1a, 0xbf916a21e2100000, 0x3d77d75c58973ce5),
    (0x3ff0000000000000, 0x0000000000000000, 0x0000000000000000),
    (0x3ff0000000000000, 0x0000000000000000, 0x0000000000000000),
    (0x3fef44659e4a4271, 0x3fa11cd1d5100000, 0x3d79a0d857e2f4b2),
    (0x3feecc07b301ecc0, 0x3fac4dfab9080000, 0x3d755b53fce557fd),
    (0x3fee573ac901e573, 0x3fb3aa2fdd260000, 0x3d7f1cb0c9532089),
    (0x3fede5d6e3f8868a, 0x3fb918a16e460000, 0x3d49af0dcd65a6e1),
    (0x3fed77b654b82c33, 0x3fbe72ec117e0000, 0x3d7a5b93c4ebe124),
    (0x3fed0cb58f6ec074, 0x3fc1dcd197550000, 0x3d55be50e71ddc6c),
    (0x3feca4b3055ee191, 0x3fc476a9f9830000, 0x3d7ee9a798719e7f),
    (0x3fec3f8f01c3f8f0, 0x3fc70742d4ef0000, 0x3d13ff1352c1219c),
    (0x3febdd2b899406f7, 0x3fc98edd077e0000, 0x3d6c383cd11362f4),
    (0x3feb7d6c3dda338b, 0x3fcc0db6cdd90000, 0x3d637bd85b1a824e),
    (0x3feb2036406c80d9, 0x3fce840be74e0000, 0x3d6a9334d525e1ec),
    (0x3feac5701ac5701a, 0x3fd0790adbb00000, 0x3d68060bfb6a4910),
    (0x3fea6d01a6d01a6d, 0x3fd1ac05b2918000, 0x3d7c1c161471580a),
    (0x3fea16d3f97a4b01, 0x3fd2db10fc4d8000, 0x3d5ab1aa62214581),
    (0x3fe9c2d14ee4a101, 0x3fd406463b1b0000, 0x3d312e95dbda6611),
    (0x3fe970e4f80cb872, 0x3fd52dbdfc4c8000, 0x3d56b53fee511af0),
    (0x3fe920fb49d0e228, 0x3fd6518fe4670000, 0x3d7eea7d7d7d1764),
    (0x3fe8d3018d3018d3, 0x3fd771d2ba7e8000, 0x3d7ecefa8d4fab97),
    (0x3fe886e5f0abb049, 0x3fd88e9c72e08000, 0x3d6913ea3d33fd14),
    (0x3fe83c977ab2bedd, 0x3fd9a802391e0000, 0x3d6197e845877c94),
    (0x3fe7f405fd017f40, 0x3fdabe18797f0000, 0x3d5f4a52f8e8a810),
    (0x3fe7ad2208e0ecc3, 0x3fdbd0f2e9e78000, 0x3d5031f4336644cc),
    (0x3fe767dce434a9b1, 0x3fdce0a4923a0000, 0x3d761f33c897020c),
    (0x3fe724287f46debc, 0x3fdded3fd4420000, 0x3d6b2632e8306320),
    (0x3fe6e1f76b4337c6, 0x3fdef6d673288000, 0x3d7888ec245a0bf0),
    (0x3fe6a13cd1537290, 0x3fdffd799a838000, 0x3d7fe6f3b2f5fc8e),
    (0x3fe661ec6a5122f9, 0x3fe0809cf27f4000, 0x3d781eaa9ef284dd),
    (0x3fe623fa7701623f, 0x3fe10113b153c000, 0x3d51d7b07d6b1143),
    (0x3fe5e75bb8d015e7, 0x3fe18028cf728000, 0x3d676b100b1f6c60),
    (0x3fe5ac056b015ac0, 0x3fe1fde3d30e8000, 0x3d226faeb9870945),
    (0x3fe571ed3c506b39, 0x3fe27a4c0585c000, 0x3d57f2c5344d762b),
];

/// Second reduction step, brings the argument within 2^-11 of one
pub(crate) static LOG2_R2: [(u64, u64, u64); 64] = [
    (0x3ff01fbe7f0a1be6, 0xbf86cf6ddd26112a, 0x3c30725e5755e314),
    (0x3ff01eba93a97b12, 0xbf86155b1d99f603, 0x3c34bcea073117f4),
    (0x3ff01db6c9029cd1, 0xbf855b54153137ff, 0x3c221e8faccad0ec),
    (0x3ff01cb31f0f534c, 0xbf84a158c27245bd, 0x3c31a5b7bfbf35d3),
    (0x3ff01baf95c9723c, 0xbf83e76923e3d678, 0x3c1eee400eb5fe34),
    (0x3ff01aac2d2acee6, 0xbf832d85380ce776, 0x3c2cbf7a513937bd),
    (0x3ff019a8e52d401e, 0xbf8273acfd74be72, 0x3c35c64599efa5e6),
    (0x3ff018a5bdca9e42, 0xbf81b9e072a2e650, 0x3c3364180e0a5d37),
    (0x3ff017a2b6fcc33e, 0xbf81001f961f3243, 0x3c363d795746f216),
    (0x3ff0169fd0bd8a8a, 0xbf80466a6671bca4, 0x3c34c99ff1907435),
    (0x3ff0159d0b06d129, 0xbf7f1981c445cd05, 0x3c14bfff6366b723),
    (0x3ff0149a65d275a6, 0xbf7da6460f76ab8c, 0x3c29c5404f47589c),
    (0x3ff01397e11a581b, 0xbf7c3321ab87f4ef, 0x3c2c0da537429cea),
    (0x3ff012957cd85a28, 0xbf7ac014958c112c, 0x3bf000c2a1b595e3),
    (0x3ff0119339065ef7, 0xbf794d1eca95f67a, 0x3c2d8d20b0564d50),
    (0x3ff01091159e4b3d, 0xbf77da4047b92b3e, 0x3bd6194a5d68cf20),
    (0x3ff00f8f129a0535, 0xbf7667790a09bf77, 0x3c2ca230e0bea645),
    (0x3ff00e8d2ff374a1, 0xbf74f4c90e9c4ead, 0x3c21de3e7f350c10),
    (0x3ff00d8b6da482ce, 0xbf73823052860649, 0x3bf5789b4c5891b8),
    (0x3ff00c89cba71a8c, 0xbf720faed2dc9a9e, 0x3c19e7c40f9839fd),
    (0x3ff00b8849f52834, 0xbf709d448cb65014, 0x3c1387e3e9b6d020),
    (0x3ff00a86e88899a4, 0xbf6e55e2fa53ebf1, 0x3c1cdaa71fddfddf),
    (0x3ff00985a75b5e3f, 0xbf6b716b429dce0f, 0x3c02f2af081367bf),
    (0x3ff00884866766ee, 0xbf688d21ec7a16d7, 0x3c1fb95c228d6f16),
    (0x3ff0078385a6a61d, 0xbf65a906f219a9e8, 0x3bf18aff10a89f29),
    (0x3ff00682a5130fbe, 0xbf62c51a4dae87f1, 0x3c0bcc7e33ddde30),
    (0x3ff00581e4a69944, 0xbf5fc2b7f2d782b1, 0x3bffe3ef3300a9fa),
    (0x3ff00481445b39a8, 0xbf59fb97df0b0b83, 0x3be0d9a601f2f324),
    (0x3ff00380c42ae963, 0xbf5434d4546227ae, 0x3c00b9b6a5868f33),
    (0x3ff00280640fa271, 0xbf4cdcda8e930c19, 0x3bf3d424ab39f789),
    (0x3ff0018024036051, 0xbf4150c558601261, 0x3bf285bb90327a0f),
    (0x3ff0000000000000, 0x0000000000000000, 0x0000000000000000),
    (0x3ff0000000000000, 0x0000000000000000, 0x0000000000000000),
    (0x3feffa011fca0a1e, 0x3f514e5640c4197b, 0x3c095728136ae401),
    (0x3feff6031f064e07, 0x3f5cd61806bf532d, 0x3c0568a4f35d8538),
    (0x3feff2061d532b9c, 0x3f642e34af550eda, 0x3c18f69cee55fec0),
    (0x3fefee0a1a513253, 0x3f69f0a5523902ea, 0x3c0daec734b11615),
    (0x3fefea0f15a12139, 0x3f6fb25e19f11b26, 0x3c18bafca62941da),
    (0x3fefe6150ee3e6d4, 0x3f72b9af9a28e282, 0x3c20fd3674e1dc5b),
    (0x3fefe21c05baa109, 0x3f7599d4678f24b9, 0x3c2dafce1f09937b),
    (0x3fefde23f9c69cf9, 0x3f78799d8c046eb0, 0x3beffa0ce0bdd217),
    (0x3fefda2ceaa956e8, 0x3f7b590b1e5951ee, 0x3c1645a769232446),
    (0x3fefd636d8047a1f, 0x3f7e381d3555dbcf, 0x3c2882320d368331),
    (0x3fefd241c179e0cc, 0x3f808b69f3dccde0, 0x3c201ad5065aba9e),
    (0x3fefce4da6ab93e8, 0x3f81fa97a61dd298, 0x3c384cd1f931ae34),
    (0x3fefca5a873bcb19, 0x3f836997bcc54a3f, 0x3c31485e97eaee03),
    (0x3fefc66862ccec93, 0x3f84d86a43264a4f, 0x3c2c75e63370988b),
    (0x3fefc27739018cfe, 0x3f86470f448fb09d, 0x3bed7361eeaed0a1),
    (0x3fefbe87097c6f5a, 0x3f87b586cc4c2523, 0x3c2b3df952cc473c),
    (0x3fefba97d3e084dd, 0x3f8923d0e5a21e06, 0x3c1cf56c7b64ae5d),
    (0x3fefb6a997d0ecdc, 0x3f8a91ed9bd3df9a, 0x3c2b957bdcd89e43),
    (0x3fefb2bc54f0f4ab, 0x3f8bffdcfa1f7fbb, 0x3c1ea8cad9a21771),
    (0x3fefaed00ae41783, 0x3f8d6d9f0bbee6f6, 0x3c35762a9af89c82),
    (0x3fefaae4b94dfe64, 0x3f8edb33dbe7d335, 0x3c121e24fc245697),
    (0x3fefa6fa5fd27ff8, 0x3f90244dbae5ed05, 0x3c312ef51b967102),
    (0x3fefa310fe15a078, 0x3f90daeaf24c3529, 0x3c410d3cfca60b45),
    (0x3fef9f2893bb9192, 0x3f91917199bb66bc, 0x3c36cf6034c32e19),
    (0x3fef9b412068b247, 0x3f9247e1b6c615d5, 0x3c242f0fffa229f7),
    (0x3fef975aa3c18ed6, 0x3f92fe3b4efcc5ad, 0x3c370106136a8919),
    (0x3fef93751d6ae09b, 0x3f93b47e67edea93, 0x3c438dd5a4f6959a),
    (0x3fef8f908d098df6, 0x3f946aab0725ea6c, 0x3c3821fc1e799e01),
    (0x3fef8bacf242aa2c, 0x3f9520c1322f1e4e, 0x3c3129dcda3ad563),
    (0x3fef87ca4cbb7550, 0x3f95d6c0ee91d2ab, 0x3c1c5b190c04606e),
    (0x3fef83e89c195c25, 0x3f968caa41d448c3, 0x3c44723441195ac9),
];

pub(crate) static LOG2_R3: [(u64, u64, u64); 8] = [
    (0x3ff000e00c40ab89, 0xbf34332be0032168, 0x3bea1003588d217a),
    (0x3ff000a006403e82, 0xbf2cdb2987366fcc, 0x3bc5c86001294bbc),
    (0x3ff0006002400d80, 0xbf2150297c90fa6f, 0x3bd01fb4865fae32),
    (0x3ff0000000000000, 0x0000000000000000, 0x0000000000000000),
    (0x3ff0000000000000, 0x0000000000000000, 0x0000000000000000),
    (0x3feffe8011ff280a, 0x3f314f8daf5e3d3b, 0x3bb3c933b4b6b914),
    (0x3feffd8031fc184e, 0x3f3cd978c38042bb, 0x3be10f8e642e66fd),
    (0x3feffc8061f5492b, 0x3f443183c878274e, 0x3be5885dd1eb6582),
];
